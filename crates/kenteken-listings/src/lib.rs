//! Used-car marketplace search links for a plate.
//!
//! Link generation is pure: no network call is made and no live availability
//! is checked. An earlier incarnation of this feature scraped marketplace
//! HTML to guess whether a plate was actually listed; that path was disabled
//! and is not reproduced here. `available` is therefore always `false` and
//! the links are plain search URLs the user can follow manually.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;

/// Everything outside the unreserved set gets percent-encoded in search
/// queries, matching what browsers produce for URL components.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// A search link on one marketplace.
///
/// `available` is not a live-checked fact; it is always `false`.
#[derive(Debug, Clone, Serialize)]
pub struct Listing {
    pub site: &'static str,
    pub name: &'static str,
    pub url: String,
    pub available: bool,
}

/// Builds the fixed marketplace link list for a normalized plate.
///
/// When both brand and model are given they are folded, together with the
/// plate, into the Marktplaats search phrase; the other sites search on the
/// plate alone.
#[must_use]
pub fn listing_links(plate: &str, brand: Option<&str>, model: Option<&str>) -> Vec<Listing> {
    let plate_q = encode(plate);
    let phrase = match (brand, model) {
        (Some(brand), Some(model)) => format!("{brand} {model} {plate}"),
        _ => plate.to_owned(),
    };
    let phrase_q = encode(&phrase);

    vec![
        Listing {
            site: "autoscout24",
            name: "AutoScout24",
            url: format!("https://www.autoscout24.nl/lst?searchtext={plate_q}"),
            available: false,
        },
        Listing {
            site: "autotrader",
            name: "AutoTrader",
            url: format!("https://www.autotrader.nl/auto/zoeken?q={plate_q}"),
            available: false,
        },
        Listing {
            site: "marktplaats",
            name: "Marktplaats",
            url: format!("https://www.marktplaats.nl/q/{phrase_q}/c/91"),
            available: false,
        },
        Listing {
            site: "gaspedaal",
            name: "Gaspedaal",
            url: format!("https://www.gaspedaal.nl/zoeken?q={plate_q}"),
            available: false,
        },
        Listing {
            site: "bovag",
            name: "BOVAG",
            url: format!("https://www.bovag.nl/occasions?search={plate_q}"),
            available: false,
        },
    ]
}

fn encode(raw: &str) -> String {
    utf8_percent_encode(raw, COMPONENT).to_string()
}
