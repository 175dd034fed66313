//! The banner section split into thin and full variants. Everything saved
//! before the split renders as the thin variant; the spacer that used to pad
//! full banners was retired outright.

use crate::migrate::Migration;

pub(super) fn migration() -> Migration {
    Migration::new()
        .rename("BannerSection", "ThinBannerSection")
        .remove("BannerSpacer")
}
