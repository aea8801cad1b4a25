use dioxus::prelude::*;

/// EXFORM, Yopougon, opposite the CHU.
pub const COMPANY_LATITUDE: f64 = 5.3547;
pub const COMPANY_LONGITUDE: f64 = -4.0920;
pub const DEFAULT_ZOOM: u8 = 15;

const MAX_ZOOM: u8 = 19;

/// `(west, south, east, north)` around the point, sized for a frame about
/// twice as wide as it is tall.
pub fn bounding_box(latitude: f64, longitude: f64, zoom: u8) -> (f64, f64, f64, f64) {
    let zoom = zoom.min(MAX_ZOOM);
    let half_lon = 360.0 / 2f64.powi(i32::from(zoom));
    let half_lat = half_lon * latitude.to_radians().cos() / 2.0;
    (
        longitude - half_lon,
        latitude - half_lat,
        longitude + half_lon,
        latitude + half_lat,
    )
}

pub fn embed_url(latitude: f64, longitude: f64, zoom: u8) -> String {
    let (west, south, east, north) = bounding_box(latitude, longitude, zoom);
    let bbox = format!("{west:.5},{south:.5},{east:.5},{north:.5}");
    let marker = format!("{latitude:.5},{longitude:.5}");
    format!(
        "https://www.openstreetmap.org/export/embed.html?bbox={}&layer=mapnik&marker={}",
        urlencoding::encode(&bbox),
        urlencoding::encode(&marker),
    )
}

pub fn full_map_url(latitude: f64, longitude: f64, zoom: u8) -> String {
    format!(
        "https://www.openstreetmap.org/?mlat={latitude:.5}&mlon={longitude:.5}#map={}/{latitude:.5}/{longitude:.5}",
        zoom.min(MAX_ZOOM)
    )
}

#[component]
pub fn LocationMap(
    #[props(default = COMPANY_LATITUDE)] latitude: f64,
    #[props(default = COMPANY_LONGITUDE)] longitude: f64,
    #[props(default = DEFAULT_ZOOM)] zoom: u8,
) -> Element {
    let lang = crate::use_lang()();
    let src = embed_url(latitude, longitude, zoom);
    let full = full_map_url(latitude, longitude, zoom);

    rsx! {
        div { class: "location_map",
            iframe {
                class: "location_map_frame",
                title: crate::t(lang, "contact.map.title"),
                src: "{src}",
                "loading": "lazy",
            }
            a {
                class: "hint",
                href: "{full}",
                target: "_blank",
                rel: "noopener noreferrer",
                {crate::t(lang, "contact.map.open")}
            }
        }
    }
}
