use anyhow::Result;
use heroku_certs_lib::core::commands::remove;
use heroku_certs_lib::core::types::{ResolutionQuery, TargetRequest};
use httpmock::prelude::*;
use serde_json::json;

use super::test_utils::{Harness, SNI_ACCEPT, tokyo};

#[test]
fn deletes_named_sni_endpoint() -> Result<()> {
    let (harness, mut console) = Harness::start()?;
    harness.list_sni(json!([tokyo()]));
    harness.ssl_addon_missing();
    let delete = harness.api.mock(|when, then| {
        when.method(DELETE)
            .path("/apps/example/sni-endpoints/tokyo-1050")
            .header("accept", SNI_ACCEPT);
        then.status(200).json_body(tokyo());
    });

    let request = TargetRequest {
        query: ResolutionQuery::by_name("tokyo-1050"),
        confirm: Some("example".to_string()),
    };
    let session = harness.session();
    remove(&session, &request, &mut console.ui)?;

    delete.assert();
    assert_eq!(
        console.err.contents(),
        "Removing SSL Endpoint tokyo-1050 (tokyo-1050.herokussl.com) from example... done\n"
    );
    assert_eq!(console.out.contents(), "");
    Ok(())
}
