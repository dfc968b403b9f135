//! Output seam towards the display layer.

/// Receives the human-readable lines produced by a scheduler.
///
/// # Examples
///
/// ```
/// use fleet_routing::scheduler::Console;
///
/// let mut lines: Vec<String> = Vec::new();
/// lines.write_line("hola".to_owned());
/// assert_eq!(lines, vec!["hola"]);
/// ```
pub trait Console {
    /// Appends one line.
    fn write_line(&mut self, line: String);
}

impl Console for Vec<String> {
    fn write_line(&mut self, line: String) {
        self.push(line);
    }
}

impl<C: Console + ?Sized> Console for &mut C {
    fn write_line(&mut self, line: String) {
        (**self).write_line(line);
    }
}
