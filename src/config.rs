// src/config.rs
//! Scaffold layouts for the two kinds of generated UI areas

use std::fmt;

/// Subdirectories created inside every scaffold directory.
pub const SUBDIRS: [&str; 4] = ["view", "controllers", "widget", "models"];

pub const VIEW_DIR: &str = "view";
pub const CONTROLLERS_DIR: &str = "controllers";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaffoldKind {
    Screen,
    Feature,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Destination root, relative to the project root
    pub root_dir: &'static str,
    /// Appended to the lowercase name for directory and file names
    pub name_suffix: &'static str,
    pub view_class_suffix: &'static str,
    pub controller_class_suffix: &'static str,
}

impl ScaffoldKind {
    pub fn layout(&self) -> Layout {
        match self {
            ScaffoldKind::Screen => Layout {
                root_dir: "lib/screens",
                name_suffix: "_screen",
                view_class_suffix: "Screen",
                controller_class_suffix: "ScreenController",
            },
            ScaffoldKind::Feature => Layout {
                root_dir: "lib/features",
                name_suffix: "",
                view_class_suffix: "",
                controller_class_suffix: "Controller",
            },
        }
    }

    /// Human label used in progress output
    pub fn label(&self) -> &'static str {
        match self {
            ScaffoldKind::Screen => "screen",
            ScaffoldKind::Feature => "feature",
        }
    }
}

impl fmt::Display for ScaffoldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
