use anyhow::{Result, anyhow};
use heroku_certs_lib::core::commands::list;
use httpmock::prelude::*;
use serde_json::json;

use super::test_utils::{Harness, akita, endpoint, tokyo};

#[test]
fn lists_both_collections() -> Result<()> {
    let (harness, mut console) = Harness::start()?;
    harness.list_sni(json!([endpoint("akita-7777", None)]));
    harness.list_ssl(json!([tokyo()]));

    let session = harness.session();
    list(&session, &mut console.ui)?;

    let out = console.out.contents();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("Name        Endpoint"));
    assert!(lines[2].starts_with("akita-7777  (Not applicable for SNI)"));
    assert!(lines[2].ends_with("SNI"));
    assert!(lines[3].contains("tokyo-1050.herokussl.com"));
    assert!(lines[3].contains("2013-08-01 21:34 UTC"));
    assert!(lines[3].ends_with("SSL"));
    Ok(())
}

#[test]
fn empty_app_without_addon() -> Result<()> {
    let (harness, mut console) = Harness::start()?;
    harness.list_sni(json!([]));
    harness.ssl_addon_missing();

    let session = harness.session();
    list(&session, &mut console.ui)?;

    assert_eq!(
        console.out.contents(),
        "example has no SSL certificates.\nUse heroku certs:add CRT KEY to add one.\n"
    );
    Ok(())
}

#[test]
fn unauthorized_listing_fails() -> Result<()> {
    let (harness, mut console) = Harness::start()?;
    harness.api.mock(|when, then| {
        when.method(GET).path("/apps/example/sni-endpoints");
        then.status(401).json_body(json!({"id": "unauthorized", "message": "Invalid credentials provided."}));
    });
    harness.list_ssl(json!([akita()]));

    let session = harness.session();
    let err = match list(&session, &mut console.ui) {
        Ok(()) => return Err(anyhow!("expected authentication failure")),
        Err(err) => err,
    };

    assert_eq!(err.to_string(), "Heroku authentication failed");
    assert_eq!(err.status(), Some(401));
    assert_eq!(console.out.contents(), "");
    Ok(())
}
