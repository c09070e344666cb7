//! Control registry and documentation.

/// A control the host exposes, as named in input scripts.
#[derive(Debug, Clone)]
pub struct ControlInfo {
    pub name: &'static str,
    pub argument: Option<&'static str>,
    pub description: &'static str,
}

impl ControlInfo {
    pub const fn new(
        name: &'static str,
        argument: Option<&'static str>,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            argument,
            description,
        }
    }

    /// Format the script form (e.g. `{"select_color": <css color>}`).
    pub fn format(&self) -> String {
        match self.argument {
            Some(arg) => format!("{{\"{}\": {}}}", self.name, arg),
            None => format!("\"{}\"", self.name),
        }
    }
}

/// Registry of all script controls.
pub struct ControlRegistry;

impl ControlRegistry {
    /// Get all registered controls.
    pub fn all() -> Vec<ControlInfo> {
        vec![
            ControlInfo::new("undo", None, "Undo the last stroke"),
            ControlInfo::new("redo", None, "Redo the last undone stroke"),
            ControlInfo::new("increase_brush_width", None, "Brush width +1"),
            ControlInfo::new("decrease_brush_width", None, "Brush width -1"),
            ControlInfo::new("zoom_in", None, "Scale +0.1"),
            ControlInfo::new("zoom_out", None, "Scale -0.1"),
            ControlInfo::new("toggle_tool", None, "Switch between pencil and eraser"),
            ControlInfo::new("clear", None, "Remove all strokes and history"),
            ControlInfo::new("select_color", Some("<css color>"), "Set the stroke color"),
            ControlInfo::new("set_brush_width", Some("<number>"), "Set the active tool's width"),
            ControlInfo::new(
                "set_scale",
                Some("{\"scale\": <number>, \"offset_x\": <number>, \"offset_y\": <number>}"),
                "Set zoom and pan",
            ),
            ControlInfo::new(
                "resize",
                Some("{\"width\": <px>, \"height\": <px>}"),
                "Resize the surface and redraw",
            ),
        ]
    }

    /// Print all controls to stdout.
    pub fn print_all() {
        println!("\n=== Script Controls ===");
        for control in Self::all() {
            println!("  {:32} {}", control.format(), control.description);
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format() {
        assert_eq!(ControlInfo::new("undo", None, "").format(), "\"undo\"");
        assert_eq!(
            ControlInfo::new("select_color", Some("<css color>"), "").format(),
            "{\"select_color\": <css color>}"
        );
    }

    #[test]
    fn test_unit_controls_parse() {
        for control in ControlRegistry::all().iter().filter(|c| c.argument.is_none()) {
            let json = format!("{{\"control\": {}}}", control.format());
            assert!(crate::script::parse_script(&format!("[{json}]")).is_ok(), "{json}");
        }
    }
}
