//! 20×4 character status panel.
//!
//! In-memory framebuffer of fixed-width lines. Rows render through the log
//! so the bench rig shows the same four lines the I2C panel would; text
//! past the last column is clipped exactly like the glass.

use heapless::String;
use log::info;

pub const PANEL_COLS: usize = 20;
pub const PANEL_ROWS: usize = 4;

pub struct StatusPanel {
    rows: [String<PANEL_COLS>; PANEL_ROWS],
}

impl StatusPanel {
    pub fn new() -> Self {
        Self {
            rows: core::array::from_fn(|_| String::new()),
        }
    }

    pub fn clear(&mut self) {
        for row in &mut self.rows {
            row.clear();
        }
    }

    pub fn write_line(&mut self, row: usize, text: &str) {
        let Some(line) = self.rows.get_mut(row) else {
            return;
        };
        line.clear();
        for ch in text.chars() {
            // Capacity reached: the panel clips at the last column.
            if line.push(ch).is_err() {
                break;
            }
        }
        info!("lcd[{row}] {line}");
    }

    pub fn line(&self, row: usize) -> &str {
        self.rows.get(row).map_or("", |line| line.as_str())
    }
}

impl Default for StatusPanel {
    fn default() -> Self {
        Self::new()
    }
}
