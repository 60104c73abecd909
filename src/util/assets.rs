use std::{borrow::Cow, sync::OnceLock};

use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets"]
struct Bundle;

static STYLESHEET: OnceLock<String> = OnceLock::new();
static FAVICON: OnceLock<String> = OnceLock::new();

/// The single stylesheet injected by the root component.
pub fn main_css() -> &'static str {
    STYLESHEET.get_or_init(|| load_text("main.css")).as_str()
}

/// `favicon.svg` as a `data:` URI, so the desktop webview needs no asset server.
pub fn favicon_data_uri() -> &'static str {
    FAVICON
        .get_or_init(|| {
            let encoded = encode_base64(load_asset("favicon.svg").as_ref());
            format!("data:image/svg+xml;base64,{encoded}")
        })
        .as_str()
}

// A missing or non-UTF-8 bundle entry is a packaging bug, not a runtime condition.
fn load_text(name: &str) -> String {
    String::from_utf8(load_asset(name).into_owned())
        .unwrap_or_else(|_| panic!("bundled {name} is not UTF-8"))
}

fn load_asset(name: &str) -> Cow<'static, [u8]> {
    match Bundle::get(name) {
        Some(file) => file.data,
        None => panic!("{name} missing from the asset bundle"),
    }
}

fn encode_base64(input: &[u8]) -> String {
    const TABLE: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
    let mut output = String::with_capacity(input.len().div_ceil(3) * 4);

    for chunk in input.chunks(3) {
        let packed = chunk
            .iter()
            .enumerate()
            .fold(0u32, |acc, (i, byte)| acc | (*byte as u32) << (16 - 8 * i));
        for i in 0..4 {
            if i <= chunk.len() {
                let index = (packed >> (18 - 6 * i)) & 0b11_1111;
                output.push(TABLE[index as usize] as char);
            } else {
                output.push('=');
            }
        }
    }

    output
}
