//! The `Query`/`Item` schema, built at startup from the static field table.

use async_graphql::dynamic::{
    Field, FieldFuture, FieldValue, InputValue, Object, ResolverContext, Schema, SchemaError,
    TypeRef,
};
use async_graphql::{Error, Request, Response, Value};
use tracing::debug;

use upc_application::queries::item_queries;
use upc_application::AppState;
use upc_domain::{
    ItemFieldBinding, UpcItem, API_KEY_ARGUMENT, ITEM_FIELDS, ITEM_QUERY_ARGUMENTS,
    ITEM_QUERY_DESCRIPTION, ITEM_QUERY_FIELD, ITEM_TYPE_DESCRIPTION, ITEM_TYPE_NAME,
    QUERY_TYPE_DESCRIPTION, QUERY_TYPE_NAME, UPC_ARGUMENT,
};

use crate::graphql::compat::normalize_missing_argument_errors;

pub fn build_schema(state: AppState) -> Result<Schema, SchemaError> {
    let item = ITEM_FIELDS.iter().fold(
        Object::new(ITEM_TYPE_NAME).description(ITEM_TYPE_DESCRIPTION),
        |object, spec| object.field(item_field(spec.bind())),
    );

    let item_query = ITEM_QUERY_ARGUMENTS.iter().fold(
        Field::new(ITEM_QUERY_FIELD, TypeRef::named(ITEM_TYPE_NAME), resolve_item)
            .description(ITEM_QUERY_DESCRIPTION),
        |field, argument| {
            field.argument(
                InputValue::new(argument.name, TypeRef::named_nn(TypeRef::STRING))
                    .description(argument.description),
            )
        },
    );
    let query = Object::new(QUERY_TYPE_NAME)
        .description(QUERY_TYPE_DESCRIPTION)
        .field(item_query);

    Schema::build(query.type_name(), None, None)
        .register(item)
        .register(query)
        .data(state)
        .finish()
}

/// Executes one request and applies the canonical validation wording.
pub async fn execute(schema: &Schema, request: Request) -> Response {
    let mut response = schema.execute(request).await;
    normalize_missing_argument_errors(&mut response);
    response
}

fn resolve_item(ctx: ResolverContext<'_>) -> FieldFuture<'_> {
    FieldFuture::new(async move {
        let state = ctx.data::<AppState>()?;
        let api_key = ctx.args.try_get(API_KEY_ARGUMENT)?.string()?;
        let upc = ctx.args.try_get(UPC_ARGUMENT)?.string()?;
        let item = item_queries::lookup_item(state, api_key, upc).await?;
        Ok(Some(FieldValue::owned_any(item)))
    })
}

fn item_field(binding: ItemFieldBinding) -> Field {
    let description = binding.spec.description;
    Field::new(binding.spec.name, TypeRef::named(TypeRef::STRING), move |ctx| {
        let resolved = resolve_item_field(&ctx, &binding);
        FieldFuture::new(async move { resolved })
    })
    .description(description)
}

fn resolve_item_field(
    ctx: &ResolverContext<'_>,
    binding: &ItemFieldBinding,
) -> async_graphql::Result<Option<Value>> {
    let item = ctx.parent_value.try_downcast_ref::<UpcItem>()?;
    match binding.resolve(item) {
        Ok(value) => Ok(value.map(Value::String)),
        Err(err) => {
            debug!(field = binding.spec.name, "upstream flagged lookup invalid: {}", err);
            if let Ok(state) = ctx.data::<AppState>() {
                state.metrics.record_invalid_item();
            }
            Err(Error::new(err.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;
    use serde_json::{json, Value as JsonValue};
    use upc_application::Metrics;
    use upc_domain::{ItemLookup, LookupError, RuntimeConfig};

    use super::*;

    const FULL_SELECTION: &str =
        "valid reason number itemName alias description avgPrice rateUp rateDown";

    struct StubLookup {
        body: Result<JsonValue, String>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ItemLookup for StubLookup {
        async fn fetch_item(&self, _api_key: &str, _upc: &str) -> Result<UpcItem, LookupError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.body {
                Ok(body) => serde_json::from_value(body.clone())
                    .map_err(|err| LookupError::MalformedBody(err.to_string())),
                Err(message) => Err(LookupError::Transport(message.clone())),
            }
        }
    }

    fn schema_with(body: Result<JsonValue, String>) -> (Schema, Arc<StubLookup>, Arc<Metrics>) {
        let lookup = Arc::new(StubLookup {
            body,
            calls: AtomicUsize::new(0),
        });
        let metrics = Arc::new(Metrics::default());
        let state = AppState {
            config: RuntimeConfig {
                bind_addr: "127.0.0.1:0".to_string(),
                graphql_path: "/".to_string(),
                graphiql: true,
                max_body_bytes: 1024 * 1024,
                request_timeout_seconds: None,
            },
            lookup: lookup.clone(),
            metrics: metrics.clone(),
        };
        (build_schema(state).expect("schema"), lookup, metrics)
    }

    fn upstream_item() -> JsonValue {
        json!({
            "valid": "true",
            "reason": null,
            "number": "0111222333446",
            "item_name": "UPC Database Testing Code",
            "alias": "Testing Code",
            "description": "http://upcdatabase.org/code/0111222333446",
            "avg_price": "123.45",
            "rate_up": "14",
            "rate_down": "3"
        })
    }

    async fn run(schema: &Schema, query: &str) -> JsonValue {
        let response = execute(schema, Request::new(query)).await;
        serde_json::to_value(&response).expect("serialize response")
    }

    #[tokio::test]
    async fn successful_lookup_resolves_every_field() {
        let (schema, lookup, _) = schema_with(Ok(upstream_item()));
        let body = run(
            &schema,
            &format!(
                r#"{{ item(apiKey: "a20087d54899d9f57cec532d3dce87f3", upc: "0111222333446") {{ {} }} }}"#,
                FULL_SELECTION
            ),
        )
        .await;
        assert!(body.get("errors").is_none(), "unexpected errors: {}", body);
        assert_eq!(
            body["data"]["item"],
            json!({
                "valid": "true",
                "reason": null,
                "number": "0111222333446",
                "itemName": "UPC Database Testing Code",
                "alias": "Testing Code",
                "description": "http://upcdatabase.org/code/0111222333446",
                "avgPrice": "123.45",
                "rateUp": "14",
                "rateDown": "3"
            })
        );
        assert_eq!(lookup.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn boolean_valid_is_rendered_as_string() {
        let mut item = upstream_item();
        item["valid"] = json!(true);
        let (schema, _, _) = schema_with(Ok(item));
        let body = run(&schema, r#"{ item(apiKey: "k", upc: "u") { valid } }"#).await;
        assert_eq!(body["data"]["item"]["valid"], json!("true"));
    }

    #[tokio::test]
    async fn missing_api_key_is_rejected_before_lookup() {
        let (schema, lookup, _) = schema_with(Ok(upstream_item()));
        let body = run(
            &schema,
            &format!(r#"{{ item(upc: "0111222333446") {{ {} }} }}"#, FULL_SELECTION),
        )
        .await;
        assert!(body["data"].is_null());
        assert_eq!(
            body["errors"][0]["message"],
            json!(r#"Field "item" argument "apiKey" of type "String!" is required but not provided."#)
        );
        assert_eq!(lookup.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn missing_upc_is_rejected_before_lookup() {
        let (schema, lookup, _) = schema_with(Ok(upstream_item()));
        let body = run(
            &schema,
            &format!(
                r#"{{ item(apiKey: "a20087d54899d9f57cec532d3dce87f3") {{ {} }} }}"#,
                FULL_SELECTION
            ),
        )
        .await;
        assert!(body["data"].is_null());
        assert_eq!(
            body["errors"][0]["message"],
            json!(r#"Field "item" argument "upc" of type "String!" is required but not provided."#)
        );
        assert_eq!(lookup.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn invalid_lookup_becomes_field_error_with_reason() {
        let (schema, _, metrics) = schema_with(Ok(json!({
            "valid": "false",
            "reason": "API Key length is incorrect",
            "number": "0111222333446"
        })));
        let body = run(&schema, r#"{ item(apiKey: "short", upc: "0111222333446") { valid reason number } }"#).await;
        assert_eq!(body["errors"][0]["message"], json!("API Key length is incorrect"));
        assert_eq!(body["errors"][0]["path"], json!(["item", "valid"]));
        assert!(body["data"]["item"]["valid"].is_null());
        assert_eq!(body["data"]["item"]["reason"], json!("API Key length is incorrect"));
        assert_eq!(body["data"]["item"]["number"], json!("0111222333446"));
        assert!(metrics
            .render_prometheus()
            .contains("upc_invalid_items_total 1\n"));
    }

    #[tokio::test]
    async fn upstream_failure_nulls_item() {
        let (schema, _, metrics) = schema_with(Err("connection refused".to_string()));
        let body = run(&schema, r#"{ item(apiKey: "k", upc: "u") { valid number } }"#).await;
        assert!(body["data"]["item"].is_null());
        assert_eq!(
            body["errors"][0]["message"],
            json!("upstream request failed: connection refused")
        );
        assert_eq!(body["errors"][0]["path"], json!(["item"]));
        assert!(metrics
            .render_prometheus()
            .contains("upc_lookup_errors_total 1\n"));
    }

    #[tokio::test]
    async fn aliases_do_not_change_upstream_keys() {
        let (schema, _, _) = schema_with(Ok(upstream_item()));
        let body = run(
            &schema,
            r#"{ item(apiKey: "k", upc: "u") { avg_price: avgPrice rate_up: rateUp } }"#,
        )
        .await;
        assert_eq!(body["data"]["item"]["avg_price"], json!("123.45"));
        assert_eq!(body["data"]["item"]["rate_up"], json!("14"));
    }

    #[test]
    fn sdl_exposes_item_type() {
        let (schema, _, _) = schema_with(Ok(upstream_item()));
        let sdl = schema.sdl();
        assert!(sdl.contains("type Item"));
        assert!(sdl.contains("type Query"));
        for spec in ITEM_FIELDS {
            assert!(sdl.contains(&format!("{}: String", spec.name)), "{} missing", spec.name);
        }
    }
}
