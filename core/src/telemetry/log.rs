use crate::scene::Blip;
use log::info;

/// Append-only sink receiving one display row per detection.
pub trait BlipLog {
    fn append(&mut self, blip: &Blip);
}

/// One formatted log row: classification plus coordinates to two decimals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlipRow {
    pub classification: String,
    pub x: String,
    pub y: String,
}

/// Table-backed log view. Rows are only ever appended during a session;
/// each one is also mirrored to the `log` facade.
#[derive(Debug, Default)]
pub struct TableLog {
    rows: Vec<BlipRow>,
}

impl TableLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[BlipRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl BlipLog for TableLog {
    fn append(&mut self, blip: &Blip) {
        let row = BlipRow {
            classification: blip.classification.label().to_string(),
            x: format!("{:.2}", blip.x),
            y: format!("{:.2}", blip.y),
        };
        info!("blip {} at ({}, {})", row.classification, row.x, row.y);
        self.rows.push(row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Classification;

    #[test]
    fn append_formats_coordinates_to_two_decimals() {
        let mut log = TableLog::new();
        log.append(&Blip::new(12.3456, 7.0, 0.2, Classification::Comet));
        assert_eq!(log.len(), 1);
        let row = &log.rows()[0];
        assert_eq!(row.classification, "comet");
        assert_eq!(row.x, "12.35");
        assert_eq!(row.y, "7.00");
    }

    #[test]
    fn rows_accumulate_in_append_order() {
        let mut log = TableLog::new();
        log.append(&Blip::new(1.0, 1.0, 0.2, Classification::Asteroid));
        log.append(&Blip::new(2.0, 2.0, 0.2, Classification::Unknown));
        assert_eq!(log.rows()[0].classification, "asteroid");
        assert_eq!(log.rows()[1].classification, "unknown");
    }
}
