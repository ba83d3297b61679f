use std::fmt;

use crate::image_pipeline::sort::{SortParameter, Sortable};

/// Console table of sorted records.
///
/// Color columns are shown only when color information was extracted; the
/// column the run sorted by carries a `*`.
pub struct RecordTable<'a, T: Sortable> {
    records: &'a [T],
    sorted_by: SortParameter,
}

impl<'a, T: Sortable> RecordTable<'a, T> {
    pub fn new(records: &'a [T], sorted_by: SortParameter) -> Self {
        Self { records, sorted_by }
    }

    fn header(&self, label: &str, column: SortParameter) -> String {
        if column == self.sorted_by {
            format!("{label}*")
        } else {
            label.to_string()
        }
    }
}

impl<T: Sortable> fmt::Display for RecordTable<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name_width = self
            .records
            .iter()
            .map(|r| r.filename().chars().count())
            .chain(std::iter::once(9))
            .max()
            .unwrap_or(9);
        let with_color = self.records.iter().any(|r| r.color().is_some());

        write!(
            f,
            "{:>5}  {:<name_width$}",
            "#",
            self.header("filename", SortParameter::Filename)
        )?;
        if with_color {
            write!(
                f,
                "  {:>5}  {:>11}  {:>6}  {:>7}  {:>7}",
                self.header("hue", SortParameter::Hue),
                self.header("saturation", SortParameter::Saturation),
                self.header("value", SortParameter::Value),
                self.header("luma", SortParameter::Luma),
                "color"
            )?;
        }
        writeln!(f)?;

        for (index, record) in self.records.iter().enumerate() {
            write!(f, "{:>5}  {:<name_width$}", index + 1, record.filename())?;
            if let Some(color) = record.color() {
                write!(
                    f,
                    "  {:>5}  {:>11.1}  {:>6.1}  {:>7.2}  #{}",
                    color.hue,
                    color.saturation,
                    color.value,
                    color.luma,
                    color.hex()
                )?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_pipeline::color::ColorInfo;
    use crate::image_pipeline::pipeline::types::RecordEntry;
    use image::Rgb;

    fn entry(name: &str, rgb: Option<[u8; 3]>) -> RecordEntry {
        RecordEntry {
            filename: name.to_string(),
            color: rgb.map(|c| ColorInfo::from_rgb(Rgb(c))),
        }
    }

    #[test]
    fn test_marks_sort_column() {
        let records = vec![entry("red.png", Some([255, 0, 0]))];
        let table = RecordTable::new(&records, SortParameter::Luma).to_string();
        let header = table.lines().next().unwrap();
        assert!(header.contains("luma*"));
        assert!(!header.contains("hue*"));

        let row = table.lines().nth(1).unwrap();
        assert!(row.contains("red.png"));
        assert!(row.contains("100.0"));
        assert!(row.contains("76.50"));
        assert!(row.contains("#ff0000"));
    }

    #[test]
    fn test_filename_only_table() {
        let records = vec![entry("a.png", None), entry("b.png", None)];
        let table = RecordTable::new(&records, SortParameter::Filename).to_string();
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("filename*"));
        assert!(!lines[0].contains("hue"));
        assert!(lines[2].contains("b.png"));
    }
}
