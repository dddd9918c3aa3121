//! Template for `generate response`.

use crate::{Field, FileName, Template};

pub const RESPONSE: Template = Template {
    name: "response",
    file_name: FileName::Derived,
    fields: &[Field::PackageName, Field::TypeName],
    body: r#"package {{PackageName}}

type {{TypeName}} struct {
	Name string
}
"#,
};

pub const TEMPLATES: &[Template] = &[RESPONSE];
