//! Templates for `generate module`.
//!
//! The five files reference each other: the controller takes the service
//! interface, and the wire provider set lists all three constructors.

use crate::{Field, FileName, Template};

const FIELDS: &[Field] = &[Field::PackageName, Field::TypeName, Field::InstanceName];

pub const SERVICE_GO: Template = Template {
    name: "service.go",
    file_name: FileName::Fixed("service.go"),
    fields: FIELDS,
    body: r#"package {{PackageName}}

import "context"

type {{TypeName}}Service interface {
	Index(ctx context.Context)
}

type {{TypeName}}ServiceImpl struct{}

func New{{TypeName}}Service() {{TypeName}}Service {
	return &{{TypeName}}ServiceImpl{}
}

func (s *{{TypeName}}ServiceImpl) Index(ctx context.Context) {}
"#,
};

pub const CONTROLLER_GO: Template = Template {
    name: "controller.go",
    file_name: FileName::Fixed("controller.go"),
    fields: FIELDS,
    body: r#"package {{PackageName}}

import "github.com/labstack/echo/v4"

type {{TypeName}}Controller struct {
	{{InstanceName}}Service {{TypeName}}Service
}

func New{{TypeName}}Controller({{InstanceName}}Service {{TypeName}}Service) *{{TypeName}}Controller {
	return &{{TypeName}}Controller{
		{{InstanceName}}Service: {{InstanceName}}Service,
	}
}

func (ctrl *{{TypeName}}Controller) Routes(r *echo.Group) {
	r.GET("/{{PackageName}}", ctrl.index)
}

func (ctrl *{{TypeName}}Controller) index(c echo.Context) error {
	return c.JSON(200, map[string]interface{}{
		"message": "Hello World",
		"ok":      true,
	})
}
"#,
};

pub const DTO_GO: Template = Template {
    name: "dto.go",
    file_name: FileName::Fixed("dto.go"),
    fields: FIELDS,
    body: r#"package {{PackageName}}

type {{TypeName}}Dto struct {
	Name string `json:"name"`
}
"#,
};

pub const WIRE_GO: Template = Template {
    name: "wire.go",
    file_name: FileName::Fixed("wire.go"),
    fields: FIELDS,
    body: r#"//go:build wireinject
// +build wireinject

package {{PackageName}}

import "github.com/google/wire"

var Provider = wire.NewSet(
	New{{TypeName}}Service,
	New{{TypeName}}Controller,
	New{{TypeName}}Middleware,
)
"#,
};

pub const MIDDLEWARE_GO: Template = Template {
    name: "middleware.go",
    file_name: FileName::Fixed("middleware.go"),
    fields: FIELDS,
    body: r#"package {{PackageName}}

type {{TypeName}}Middleware struct{}

func New{{TypeName}}Middleware() *{{TypeName}}Middleware {
	return &{{TypeName}}Middleware{}
}
"#,
};

pub const TEMPLATES: &[Template] = &[SERVICE_GO, CONTROLLER_GO, DTO_GO, WIRE_GO, MIDDLEWARE_GO];
