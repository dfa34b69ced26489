/*
[INPUT]:  LYKKE_EMAIL / LYKKE_PASSWORD environment variables
[OUTPUT]: Session token attached to the wallet client
[POS]:    Examples - wallet authentication flow demonstration
[UPDATE]: When auth flow changes
*/

use lykke_adapter::*;

/// Example: Authentication flow
///
/// 1. Create the wallet client
/// 2. Check that the account exists
/// 3. Authenticate and keep the returned token for later calls
#[tokio::main]
async fn main() {
    println!("=== Lykke Authentication Example ===\n");

    let (email, password) = match (std::env::var("LYKKE_EMAIL"), std::env::var("LYKKE_PASSWORD")) {
        (Ok(email), Ok(password)) => (email, password),
        _ => {
            eprintln!("Set LYKKE_EMAIL and LYKKE_PASSWORD to run this example");
            return;
        }
    };

    let mut wallet = match LykkeWalletApi::new() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ Wallet client created");

    match wallet.account_exist(&email, None).await {
        Ok(response) => println!("✓ Account lookup: {}", response.text()),
        Err(e) => {
            println!("✗ Account lookup failed: {}", e);
            return;
        }
    }

    let response = match wallet.auth(&email, &password, Some("lykke-adapter example"), None).await {
        Ok(response) => response,
        Err(e) => {
            println!("✗ Auth failed: {}", e);
            return;
        }
    };

    match response.json::<ApiEnvelope<AuthResult>>() {
        Ok(ApiEnvelope {
            result: Some(result),
            ..
        }) => {
            wallet.set_token(result.token);
            println!("✓ Authenticated, token stored on the wallet client");
        }
        Ok(envelope) => println!("✗ Auth rejected: {:?}", envelope.error),
        Err(e) => println!("✗ Unexpected auth payload: {}", e),
    }

    println!("\n✓ Authentication example complete");
}
