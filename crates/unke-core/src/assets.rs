//! Asset resolution seam.
//!
//! The engine never touches storage; collaborators that can serve icon art
//! implement [`AssetResolver`], and the capability is selected once at
//! startup. When no asset backend exists, [`NoAssets`] keeps everything on
//! the plain-text path.

use std::path::PathBuf;

use crate::reading::Reading;

/// Resolves a stable code (misfortune or branch) to an asset file, if any.
pub trait AssetResolver {
    /// Return the asset path for `code`, or `None` if no asset exists.
    fn resolve(&self, code: &str) -> Option<PathBuf>;
}

/// No-op resolver for processes without an asset backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAssets;

impl AssetResolver for NoAssets {
    fn resolve(&self, _code: &str) -> Option<PathBuf> {
        None
    }
}

/// Resolve art for a reading through the fallback chain:
/// misfortune-category art, then the day-branch icon, then nothing
/// (caller falls back to plain text).
pub fn resolve_reading_art(resolver: &dyn AssetResolver, reading: &Reading) -> Option<PathBuf> {
    resolver
        .resolve(&reading.misfortune.code)
        .or_else(|| resolver.resolve(&reading.day_branch.code))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reading::compose_reading;
    use crate::tables::Tables;
    use chrono::NaiveDateTime;

    struct FixedAssets(&'static str);

    impl AssetResolver for FixedAssets {
        fn resolve(&self, code: &str) -> Option<PathBuf> {
            (code == self.0).then(|| PathBuf::from(format!("{code}.png")))
        }
    }

    fn epoch_reading(tables: &Tables) -> Reading<'_> {
        compose_reading(tables, NaiveDateTime::default(), 0)
    }

    #[test]
    fn no_assets_resolves_nothing() {
        let tables = Tables::builtin();
        let r = epoch_reading(&tables);
        assert!(resolve_reading_art(&NoAssets, &r).is_none());
    }

    #[test]
    fn misfortune_art_preferred() {
        let tables = Tables::builtin();
        let r = epoch_reading(&tables);
        let resolver = FixedAssets("fire");
        assert_eq!(
            resolve_reading_art(&resolver, &r),
            Some(PathBuf::from("fire.png"))
        );
    }

    #[test]
    fn falls_back_to_branch_icon() {
        let tables = Tables::builtin();
        let r = epoch_reading(&tables);
        let resolver = FixedAssets("zi");
        assert_eq!(
            resolve_reading_art(&resolver, &r),
            Some(PathBuf::from("zi.png"))
        );
    }
}
