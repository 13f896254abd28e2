//! # Browser Pages
//!
//! Inline-HTML pages for the demo: a landing page that starts checkout, and
//! the success/cancel confirmations the provider redirects back to.

use crate::state::AppState;
use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse},
};
use std::collections::HashMap;

/// Landing page with the Pay button.
///
/// The button script POSTs `/api/checkout`, guards double submission with a
/// loading flag, and redirects the browser to the returned hosted URL. A
/// failed call leaves the page in place and alerts.
pub async fn landing(State(state): State<AppState>) -> impl IntoResponse {
    Html(format!(
        r#"<!DOCTYPE html>
<html>
<head><title>{name}</title></head>
<body style="font-family: system-ui; display: flex; justify-content: center; align-items: center; height: 100vh; margin: 0; background: linear-gradient(135deg, #1a1a2e 0%, #16213e 100%);">
    <div style="background: white; padding: 40px; border-radius: 16px; text-align: center; box-shadow: 0 2px 10px rgba(0,0,0,0.1);">
        <h1 style="margin: 0 0 10px; font-size: 24px;">{name}</h1>
        <p style="color: #666; margin-bottom: 20px;">{description} &mdash; {price}</p>
        <button id="pay" style="background: #635bff; color: white; border: none; padding: 12px 24px; border-radius: 4px; font-size: 16px; cursor: pointer;">Pay Now</button>
    </div>
    <script>
        let loading = false;
        const button = document.getElementById('pay');
        button.addEventListener('click', async () => {{
            if (loading) return;
            loading = true;
            button.disabled = true;
            button.textContent = 'Loading...';
            try {{
                const response = await fetch('/api/checkout', {{ method: 'POST' }});
                const data = await response.json();
                if (response.ok && data.url) {{
                    window.location.href = data.url;
                    return;
                }}
                alert('Failed to start checkout');
            }} catch (error) {{
                console.error('Checkout error:', error);
                alert('Failed to start checkout');
            }}
            loading = false;
            button.disabled = false;
            button.textContent = 'Pay Now';
        }});
    </script>
</body>
</html>
"#,
        name = state.product.name,
        description = state.product.description,
        price = state.product.display_price(),
    ))
}

/// Checkout success page
pub async fn success(Query(params): Query<HashMap<String, String>>) -> Html<String> {
    let session_id = params
        .get("session_id")
        .map(|s| s.as_str())
        .unwrap_or("unknown");
    Html(format!(
        r#"<!DOCTYPE html>
<html>
<head><title>Payment Successful</title></head>
<body style="font-family: system-ui; display: flex; justify-content: center; align-items: center; height: 100vh; margin: 0; background: linear-gradient(135deg, #1a1a2e 0%, #16213e 100%);">
    <div style="background: white; padding: 60px; border-radius: 16px; text-align: center;">
        <div style="font-size: 60px;">&#9989;</div>
        <h1>Payment Successful!</h1>
        <p>Session: <code>{}</code></p>
        <p style="color: #666;">Your payment was processed successfully.</p>
        <p><a href="/">Back to home</a></p>
    </div>
</body>
</html>
"#,
        session_id
    ))
}

/// Checkout cancel page
pub async fn cancel() -> impl IntoResponse {
    Html(
        r#"<!DOCTYPE html>
<html>
<head><title>Payment Cancelled</title></head>
<body style="font-family: system-ui; display: flex; justify-content: center; align-items: center; height: 100vh; margin: 0; background: linear-gradient(135deg, #1a1a2e 0%, #16213e 100%);">
    <div style="background: white; padding: 60px; border-radius: 16px; text-align: center;">
        <div style="font-size: 60px;">&#10060;</div>
        <h1>Payment Cancelled</h1>
        <p style="color: #666;">No charges were made.</p>
        <p><a href="/">Back to home</a></p>
    </div>
</body>
</html>
"#,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_success_page_echoes_session_id() {
        let mut params = HashMap::new();
        params.insert("session_id".to_string(), "cs_test_123".to_string());

        let Html(body) = success(Query(params)).await;
        assert!(body.contains("cs_test_123"));
    }
}
