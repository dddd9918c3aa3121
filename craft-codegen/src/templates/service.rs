//! Template for `generate service`.

use crate::{Field, FileName, Template};

pub const SERVICE: Template = Template {
    name: "service",
    file_name: FileName::Derived,
    fields: &[Field::PackageName, Field::TypeName, Field::InstanceName],
    body: r#"package {{PackageName}}

import (
	"context"

	"github.com/goravel/framework/contracts/database/orm"
)

type {{TypeName}} interface {
	FindAll(ctx context.Context) error
}

type {{InstanceName}} struct {
	orm orm.Orm
}

func New{{TypeName}}(orm orm.Orm) {{TypeName}} {
	return &{{InstanceName}}{
		orm: orm,
	}
}

func (s *{{InstanceName}}) FindAll(ctx context.Context) error {
	return nil
}
"#,
};

pub const TEMPLATES: &[Template] = &[SERVICE];
