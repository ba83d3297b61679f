//! Record ordering
//!
//! Stable ascending sort by filename or by one of the color attributes.

use std::cmp::Ordering;

use clap::ValueEnum;
use icu_collator::{Collator, CollatorOptions};

use crate::image_pipeline::color::ColorInfo;
use crate::image_pipeline::common::error::{Result, SortError};

/// Attribute the images are ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortParameter {
    Filename,
    #[default]
    Hue,
    Saturation,
    Value,
    Luma,
}

impl SortParameter {
    /// Whether ordering needs extracted color information.
    pub fn needs_color(self) -> bool {
        !matches!(self, Self::Filename)
    }

    fn key(self, color: &ColorInfo) -> f64 {
        match self {
            Self::Filename => 0.0,
            Self::Hue => f64::from(color.hue),
            Self::Saturation => color.saturation,
            Self::Value => color.value,
            Self::Luma => color.luma,
        }
    }
}

/// Anything the sorter can order.
pub trait Sortable {
    fn filename(&self) -> &str;
    fn color(&self) -> Option<&ColorInfo>;
}

/// Sorts `records` ascending by `parameter`, keeping the input order of ties.
///
/// Fails without reordering anything if a color attribute is requested and
/// some record has no color information.
pub fn sort_records<T: Sortable>(records: &mut [T], parameter: SortParameter) -> Result<()> {
    if parameter == SortParameter::Filename {
        let collator = FilenameCollator::new()?;
        records.sort_by(|a, b| collator.compare(a.filename(), b.filename()));
        return Ok(());
    }

    if let Some(missing) = records.iter().find(|r| r.color().is_none()) {
        return Err(SortError::MissingColorInfo(missing.filename().to_string()));
    }

    let key = |record: &T| record.color().map_or(0.0, |color| parameter.key(color));
    records.sort_by(|a, b| key(a).total_cmp(&key(b)));
    Ok(())
}

/// Dictionary order for filenames, using the root-locale Unicode collation.
///
/// Accents and case only break ties between names that are otherwise equal,
/// lowercase first; punctuation sorts before digits and letters.
pub struct FilenameCollator {
    collator: Collator,
}

impl FilenameCollator {
    pub fn new() -> Result<Self> {
        let collator = Collator::try_new(&Default::default(), CollatorOptions::new())
            .map_err(|e| SortError::CollationError(format!("{e:?}")))?;
        Ok(Self { collator })
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.collator.compare(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    struct Entry {
        name: &'static str,
        color: Option<ColorInfo>,
    }

    impl Sortable for Entry {
        fn filename(&self) -> &str {
            self.name
        }
        fn color(&self) -> Option<&ColorInfo> {
            self.color.as_ref()
        }
    }

    fn named(name: &'static str) -> Entry {
        Entry { name, color: None }
    }

    fn colored(name: &'static str, rgb: [u8; 3]) -> Entry {
        Entry { name, color: Some(ColorInfo::from_rgb(Rgb(rgb))) }
    }

    fn names(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(|e| e.name).collect()
    }

    #[test]
    fn test_sort_by_filename() {
        let mut entries = vec![named("b.png"), named("a.png"), named("c.png")];
        sort_records(&mut entries, SortParameter::Filename).unwrap();
        assert_eq!(names(&entries), vec!["a.png", "b.png", "c.png"]);
    }

    #[test]
    fn test_filename_order_ignores_case() {
        let mut entries = vec![named("Zebra.jpg"), named("apple.png"), named("Banana.png")];
        sort_records(&mut entries, SortParameter::Filename).unwrap();
        assert_eq!(names(&entries), vec!["apple.png", "Banana.png", "Zebra.jpg"]);
    }

    #[test]
    fn test_lowercase_before_uppercase() {
        let collator = FilenameCollator::new().unwrap();
        assert_eq!(collator.compare("a.png", "A.png"), Ordering::Less);
        assert_eq!(collator.compare("B.png", "b.png"), Ordering::Greater);
        assert_eq!(collator.compare("same.png", "same.png"), Ordering::Equal);
    }

    #[test]
    fn test_accented_names_sort_with_their_base_letter() {
        let collator = FilenameCollator::new().unwrap();
        assert_eq!(collator.compare("éclair.png", "zebra.png"), Ordering::Less);
        assert_eq!(collator.compare("eclair.png", "éclair.png"), Ordering::Less);

        let mut entries = vec![
            named("beta.png"),
            named("Ångström.png"),
            named("zèbre.png"),
            named("alpha.png"),
            named("éclair.png"),
        ];
        sort_records(&mut entries, SortParameter::Filename).unwrap();
        assert_eq!(
            names(&entries),
            vec!["alpha.png", "Ångström.png", "beta.png", "éclair.png", "zèbre.png"]
        );
    }

    #[test]
    fn test_punctuation_sorts_before_letters() {
        let collator = FilenameCollator::new().unwrap();
        assert_eq!(collator.compare("a_b.png", "a.png"), Ordering::Less);
        assert_eq!(collator.compare("a-1.png", "ab.png"), Ordering::Less);
    }

    #[test]
    fn test_sort_by_hue() {
        let mut entries = vec![
            colored("blue", [0, 0, 255]),
            colored("red", [255, 0, 0]),
            colored("green", [0, 255, 0]),
        ];
        sort_records(&mut entries, SortParameter::Hue).unwrap();
        assert_eq!(names(&entries), vec!["red", "green", "blue"]);
    }

    #[test]
    fn test_sort_by_luma_and_value() {
        let mut entries = vec![
            colored("white", [255, 255, 255]),
            colored("black", [0, 0, 0]),
            colored("grey", [128, 128, 128]),
        ];
        sort_records(&mut entries, SortParameter::Luma).unwrap();
        assert_eq!(names(&entries), vec!["black", "grey", "white"]);

        entries.reverse();
        sort_records(&mut entries, SortParameter::Value).unwrap();
        assert_eq!(names(&entries), vec!["black", "grey", "white"]);
    }

    #[test]
    fn test_sort_by_saturation() {
        let mut entries = vec![
            colored("vivid", [255, 0, 0]),
            colored("grey", [90, 90, 90]),
            colored("muted", [150, 100, 100]),
        ];
        sort_records(&mut entries, SortParameter::Saturation).unwrap();
        assert_eq!(names(&entries), vec!["grey", "muted", "vivid"]);
    }

    #[test]
    fn test_sort_is_stable() {
        // all achromatic, so every hue is 0
        let mut entries = vec![
            colored("third", [30, 30, 30]),
            colored("first", [200, 200, 200]),
            colored("second", [0, 0, 0]),
        ];
        sort_records(&mut entries, SortParameter::Hue).unwrap();
        assert_eq!(names(&entries), vec!["third", "first", "second"]);
    }

    #[test]
    fn test_missing_color_fails_without_reordering() {
        let mut entries = vec![colored("b", [0, 0, 255]), named("a")];
        let result = sort_records(&mut entries, SortParameter::Hue);
        assert!(matches!(result, Err(SortError::MissingColorInfo(name)) if name == "a"));
        assert_eq!(names(&entries), vec!["b", "a"]);
    }
}
