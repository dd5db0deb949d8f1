//! CSS selector registry for Transfermarkt pages.
//!
//! One constant per extracted field, grouped the way the site groups its
//! pages. A markup change on the site should only ever be a one-file fix.

pub mod players {
    pub mod profile {
        /// Player name in the page header. Doubles as the marker that the
        /// fetched document is a real player page.
        pub const NAME: &str = "header.data-header h1.data-header__headline-wrapper";
    }

    pub mod transfers {
        /// Anchor to the transfer detail page, one per grid row. The href
        /// carries the transfer id.
        pub const TRANSFER_URLS: &str =
            "div.tm-player-transfer-history-grid a.tm-player-transfer-history-grid__link";

        pub const SEASONS: &str =
            "div.tm-player-transfer-history-grid .tm-player-transfer-history-grid__season";

        pub const DATES: &str =
            "div.tm-player-transfer-history-grid .tm-player-transfer-history-grid__date";

        pub const OLD_CLUB_URLS: &str = "div.tm-player-transfer-history-grid \
             .tm-player-transfer-history-grid__old-club a.tm-player-transfer-history-grid__club-link";

        pub const OLD_CLUB_NAMES: &str = "div.tm-player-transfer-history-grid \
             .tm-player-transfer-history-grid__old-club a.tm-player-transfer-history-grid__club-link";

        pub const NEW_CLUB_URLS: &str = "div.tm-player-transfer-history-grid \
             .tm-player-transfer-history-grid__new-club a.tm-player-transfer-history-grid__club-link";

        pub const NEW_CLUB_NAMES: &str = "div.tm-player-transfer-history-grid \
             .tm-player-transfer-history-grid__new-club a.tm-player-transfer-history-grid__club-link";

        pub const MARKET_VALUES: &str =
            "div.tm-player-transfer-history-grid .tm-player-transfer-history-grid__market-value";

        pub const FEES: &str =
            "div.tm-player-transfer-history-grid .tm-player-transfer-history-grid__fee";

        /// Free-text list of youth clubs, comma-delimited.
        pub const YOUTH_CLUBS: &str = "div[data-viewport='Jugendvereine'] div.content";
    }
}
