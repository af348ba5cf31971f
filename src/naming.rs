// src/naming.rs
use crate::config::ScaffoldKind;

/// Splits on runs of non ASCII-alphanumeric characters, upper-cases the first
/// letter of each part and joins them. Returns an empty string when there is
/// nothing alphanumeric to keep.
pub fn to_pascal_case(name: &str) -> String {
    name.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(capitalize)
        .collect()
}

fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// Every name a scaffold run needs, derived once from the raw argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldNames {
    pub kind: ScaffoldKind,
    pub raw: String,
    pub base_name: String,
    pub pascal_name: String,
    pub dir_name: String,
    pub view_class: String,
    pub controller_class: String,
}

impl ScaffoldNames {
    pub fn derive(raw: &str, kind: ScaffoldKind) -> Self {
        let layout = kind.layout();
        let base_name = raw.to_lowercase();
        let pascal_name = to_pascal_case(&base_name);

        Self {
            kind,
            raw: raw.to_string(),
            dir_name: format!("{}{}", base_name, layout.name_suffix),
            view_class: format!("{}{}", pascal_name, layout.view_class_suffix),
            controller_class: format!("{}{}", pascal_name, layout.controller_class_suffix),
            base_name,
            pascal_name,
        }
    }

    pub fn view_file(&self) -> String {
        format!("{}.dart", self.dir_name)
    }

    pub fn controller_file(&self) -> String {
        format!("{}_controller.dart", self.dir_name)
    }
}
