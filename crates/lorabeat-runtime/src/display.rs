//! Display adapter seam

/// Renders status lines on the node's local display
pub trait DisplaySink {
    /// Replace the whole display contents with `lines`
    fn render(&mut self, lines: &[String]);
}

/// Console display for desk runs
#[derive(Debug, Default)]
pub struct ConsoleDisplay;

impl DisplaySink for ConsoleDisplay {
    fn render(&mut self, lines: &[String]) {
        println!("+----------------------+");
        for line in lines {
            println!("| {:<20} |", line);
        }
        println!("+----------------------+");
    }
}

/// Display that records every rendered frame, for tests
#[derive(Debug, Default)]
pub struct CapturedDisplay {
    pub frames: Vec<Vec<String>>,
}

impl CapturedDisplay {
    pub fn last(&self) -> Option<&Vec<String>> {
        self.frames.last()
    }
}

impl DisplaySink for CapturedDisplay {
    fn render(&mut self, lines: &[String]) {
        self.frames.push(lines.to_vec());
    }
}
