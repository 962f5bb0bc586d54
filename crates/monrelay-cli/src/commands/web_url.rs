//! Web UI URL derivation

use monrelay_core::web_url;

pub fn print(api_url: &str) {
    println!("{}", web_url(api_url));
}
