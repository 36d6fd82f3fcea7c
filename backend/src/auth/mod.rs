use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use std::str::FromStr;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Wallet address
    pub exp: usize,  // Expiration time
}

pub fn create_token(
    wallet_address: &str,
    jwt_secret: &str,
    ttl_hours: i64,
) -> Result<String, jsonwebtoken::errors::Error> {
    let expiration = (Utc::now() + Duration::hours(ttl_hours)).timestamp().max(0) as usize;
    let claims = Claims {
        sub: wallet_address.to_string(),
        exp: expiration,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret.as_bytes()),
    )
}

/// Returns the wallet address the token was issued to.
pub fn validate_token(token: &str, jwt_secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(token_data.claims.sub)
}

/// Checks a base58 ed25519 signature of `message` by `wallet_address`.
pub fn verify_wallet_signature(wallet_address: &str, signature: &str, message: &str) -> bool {
    let pubkey = match Pubkey::from_str(wallet_address) {
        Ok(pubkey) => pubkey,
        Err(_) => return false,
    };
    let signature = match Signature::from_str(signature) {
        Ok(signature) => signature,
        Err(_) => return false,
    };
    signature.verify(&pubkey.to_bytes(), message.as_bytes())
}

const LOGIN_PREFIX: &str = "login to rental ledger as ";

/// Text a wallet signs to log in at unix time `issued_at`.
pub fn login_message(wallet_address: &str, issued_at: i64) -> String {
    format!("{LOGIN_PREFIX}{wallet_address} at {issued_at}")
}

/// Accepts only a login message for `wallet_address` issued within
/// `window_secs` of `now`, so a signature over unrelated or old text
/// cannot be turned into a token.
pub fn check_login_message(message: &str, wallet_address: &str, now: i64, window_secs: u64) -> bool {
    let Some((wallet, issued_at)) = message
        .strip_prefix(LOGIN_PREFIX)
        .and_then(|rest| rest.rsplit_once(" at "))
    else {
        return false;
    };
    match issued_at.parse::<i64>() {
        Ok(issued_at) => wallet == wallet_address && now.abs_diff(issued_at) <= window_secs,
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::signature::Keypair;
    use solana_sdk::signer::Signer;

    #[test]
    fn token_round_trips_subject() {
        let token = create_token("wallet", "secret", 1).unwrap();
        assert_eq!(validate_token(&token, "secret").unwrap(), "wallet");
        assert!(validate_token(&token, "other-secret").is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let token = create_token("wallet", "secret", -2).unwrap();
        assert!(validate_token(&token, "secret").is_err());
    }

    #[test]
    fn wallet_signature_is_checked_against_message_and_key() {
        let keypair = Keypair::new();
        let signature = keypair.sign_message(b"login").to_string();
        let wallet = keypair.pubkey().to_string();

        assert!(verify_wallet_signature(&wallet, &signature, "login"));
        assert!(!verify_wallet_signature(&wallet, &signature, "logout"));
        assert!(!verify_wallet_signature(
            &Keypair::new().pubkey().to_string(),
            &signature,
            "login"
        ));
        assert!(!verify_wallet_signature("not-a-key", &signature, "login"));
        assert!(!verify_wallet_signature(&wallet, "not-a-signature", "login"));
    }

    #[test]
    fn login_message_must_name_wallet_and_be_fresh() {
        let wallet = Keypair::new().pubkey().to_string();
        let now = 1_700_000_000;

        assert!(check_login_message(&login_message(&wallet, now - 60), &wallet, now, 300));
        assert!(check_login_message(&login_message(&wallet, now + 5), &wallet, now, 300));
        assert!(!check_login_message(&login_message(&wallet, now - 301), &wallet, now, 300));
        assert!(!check_login_message(&login_message(&wallet, i64::MIN), &wallet, now, 300));
        assert!(!check_login_message(
            &login_message(&Keypair::new().pubkey().to_string(), now),
            &wallet,
            now,
            300
        ));
        assert!(!check_login_message("hello from some other app", &wallet, now, 300));
        assert!(!check_login_message(
            &format!("login to rental ledger as {wallet} at soon"),
            &wallet,
            now,
            300
        ));
    }
}
