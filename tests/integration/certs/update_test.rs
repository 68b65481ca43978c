use anyhow::{Result, anyhow};
use heroku_certs_lib::core::commands::update;
use heroku_certs_lib::core::types::{ResolutionQuery, UpdateRequest};
use httpmock::Method;
use httpmock::prelude::*;
use serde_json::json;

use super::test_utils::{Harness, SNI_ACCEPT, TOKYO_DETAILS, akita, tokyo, write_material};

fn request(query: ResolutionQuery) -> Result<UpdateRequest> {
    let (crt, key) = write_material()?;
    Ok(UpdateRequest {
        crt,
        key,
        query,
        bypass: true,
        confirm: Some("example".to_string()),
    })
}

#[test]
fn updates_sni_endpoint_by_name() -> Result<()> {
    let (harness, mut console) = Harness::start()?;
    harness.list_sni(json!([tokyo()]));
    harness.ssl_addon_missing();
    let patch = harness.api.mock(|when, then| {
        when.method(Method::PATCH)
            .path("/apps/example/sni-endpoints/tokyo-1050")
            .header("accept", SNI_ACCEPT)
            .json_body(json!({
                "certificate_chain": "pem content",
                "private_key": "key content"
            }));
        then.status(200).json_body(tokyo());
    });

    let request = request(ResolutionQuery::by_name("tokyo-1050"))?;
    let session = harness.session();
    update(&session, &request, &mut console.ui)?;

    patch.assert();
    assert_eq!(
        console.err.contents(),
        "Updating SSL Endpoint tokyo-1050 (tokyo-1050.herokussl.com) for example... done\n"
    );
    assert_eq!(
        console.out.contents(),
        format!("Updated certificate details:\n{TOKYO_DETAILS}\n")
    );
    Ok(())
}

#[test]
fn ambiguous_cname_is_rejected() -> Result<()> {
    let (harness, mut console) = Harness::start()?;
    harness.list_sni(json!([]));
    harness.list_ssl(json!([tokyo(), akita()]));
    let patch = harness.api.mock(|when, then| {
        when.method(Method::PATCH);
        then.status(200).json_body(tokyo());
    });

    let request = request(ResolutionQuery::by_cname("herokussl"))?;
    let session = harness.session();
    let err = match update(&session, &request, &mut console.ui) {
        Ok(()) => return Err(anyhow!("expected resolution failure")),
        Err(err) => err,
    };
    console.ui.error(&err);

    assert_eq!(err.exit_code(), 1);
    assert_eq!(
        console.err.contents(),
        " ▸    Must pass --name when more than one endpoint matches --endpoint\n"
    );
    assert_eq!(patch.hits(), 0);
    Ok(())
}

#[test]
fn platform_error_message_is_shown() -> Result<()> {
    let (harness, mut console) = Harness::start()?;
    harness.list_sni(json!([tokyo()]));
    harness.ssl_addon_missing();
    harness.api.mock(|when, then| {
        when.method(Method::PATCH).path("/apps/example/sni-endpoints/tokyo-1050");
        then.status(422).json_body(json!({
            "id": "invalid_params",
            "message": "Key doesn't match the certificate."
        }));
    });

    let request = request(ResolutionQuery::default())?;
    let session = harness.session();
    let err = match update(&session, &request, &mut console.ui) {
        Ok(()) => return Err(anyhow!("expected platform failure")),
        Err(err) => err,
    };

    assert_eq!(err.to_string(), "Key doesn't match the certificate.");
    assert_eq!(err.status(), Some(422));
    assert!(console.err.contents().ends_with("for example... !!!\n"));
    Ok(())
}
