use anyhow::{Result, anyhow};
use heroku_certs_lib::core::commands::rollback;
use heroku_certs_lib::core::error::CertsError;
use heroku_certs_lib::core::types::{ResolutionQuery, TargetRequest};
use httpmock::prelude::*;
use serde_json::json;

use super::test_utils::{Harness, tokyo};

fn request() -> TargetRequest {
    TargetRequest {
        query: ResolutionQuery::default(),
        confirm: Some("example".to_string()),
    }
}

#[test]
fn rolls_back_dedicated_endpoint() -> Result<()> {
    let (harness, mut console) = Harness::start()?;
    harness.list_sni(json!([]));
    harness.list_ssl(json!([tokyo()]));
    let call = harness.api.mock(|when, then| {
        when.method(POST)
            .path("/apps/example/ssl-endpoints/tokyo-1050.herokussl.com/rollback")
            .header("accept", "application/json")
            .header("x-heroku-api-version", "2");
        then.status(200).json_body(tokyo());
    });

    let request = request();
    let session = harness.session();
    rollback(&session, &request, &mut console.ui)?;

    call.assert();
    assert_eq!(
        console.err.contents(),
        "Rolling back SSL Endpoint tokyo-1050 (tokyo-1050.herokussl.com) for example... done\n"
    );
    assert!(
        console
            .out
            .contents()
            .starts_with("New active certificate details:\n")
    );
    Ok(())
}

#[test]
fn sni_endpoint_is_refused_without_mutating_call() -> Result<()> {
    let (harness, mut console) = Harness::start()?;
    harness.list_sni(json!([tokyo()]));
    harness.ssl_addon_missing();
    let mutation = harness.api.mock(|when, then| {
        when.method(POST);
        then.status(200).json_body(tokyo());
    });

    let request = request();
    let session = harness.session();
    let err = match rollback(&session, &request, &mut console.ui) {
        Ok(()) => return Err(anyhow!("expected kind mismatch")),
        Err(err) => err,
    };

    assert!(matches!(err, CertsError::KindMismatch));
    assert_eq!(
        err.to_string(),
        "SNI Endpoints cannot be rolled back, please update with a new cert."
    );
    assert_eq!(mutation.hits(), 0);
    assert_eq!(console.out.contents(), "");
    Ok(())
}
