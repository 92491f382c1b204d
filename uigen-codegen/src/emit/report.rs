//! Record of what a generator synthesized and left out.

use serde::Serialize;
use uigen_core::SkipReason;

/// A property a synthesized emitter does not mirror.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedProperty {
    /// Fully qualified name of the owning type.
    pub type_name: String,
    /// Property name.
    pub property: String,
    /// Why it is not mirrored.
    pub reason: SkipReason,
}

/// Summary of emitters synthesized during a generator's lifetime.
///
/// Each type appears at most once: properties are classified when its
/// emitter is synthesized, not on every emission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EmissionReport {
    /// Types that received a synthesized emitter, in synthesis order.
    pub synthesized: Vec<String>,
    /// Properties left out of synthesized emitters.
    pub skipped: Vec<SkippedProperty>,
}

impl EmissionReport {
    pub(crate) fn record_synthesized(&mut self, type_name: &str) {
        self.synthesized.push(type_name.to_string());
    }

    pub(crate) fn record_skipped(&mut self, type_name: &str, property: &str, reason: SkipReason) {
        self.skipped.push(SkippedProperty {
            type_name: type_name.to_string(),
            property: property.to_string(),
            reason,
        });
    }

    /// Skipped properties of one type.
    pub fn skipped_for<'a>(
        &'a self,
        type_name: &'a str,
    ) -> impl Iterator<Item = &'a SkippedProperty> + 'a {
        self.skipped.iter().filter(move |s| s.type_name == type_name)
    }

    /// Check if nothing was synthesized.
    pub fn is_empty(&self) -> bool {
        self.synthesized.is_empty() && self.skipped.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skipped_for_filters_by_type() {
        let mut report = EmissionReport::default();
        assert!(report.is_empty());

        report.record_synthesized("App.A");
        report.record_skipped("App.A", "Item", SkipReason::RequiresArguments);
        report.record_skipped("App.B", "Secret", SkipReason::NoGetter);

        let a: Vec<_> = report.skipped_for("App.A").map(|s| s.property.as_str()).collect();
        assert_eq!(a, ["Item"]);
        assert!(!report.is_empty());
    }
}
