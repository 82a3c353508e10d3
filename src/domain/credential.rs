use crate::error::{Result, UssdError};
use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

/// Number of digits in a subscriber PIN.
pub const PIN_LENGTH: usize = 4;

/// Returns true when `input` is exactly four ASCII decimal digits.
pub fn is_valid_pin(input: &str) -> bool {
    input.len() == PIN_LENGTH && input.bytes().all(|b| b.is_ascii_digit())
}

/// Salted one-way hashing for PINs.
///
/// Hashes are Argon2id PHC strings, so the parameters and salt travel with the
/// stored value and verification does not depend on the hasher's own cost settings.
#[derive(Clone)]
pub struct PinHasher {
    argon2: Argon2<'static>,
}

impl Default for PinHasher {
    fn default() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }
}

impl PinHasher {
    /// Builds a hasher with explicit Argon2 costs (memory in KiB, iterations, lanes).
    pub fn with_cost(m_cost: u32, t_cost: u32, p_cost: u32) -> Result<Self> {
        let params = Params::new(m_cost, t_cost, p_cost, None)
            .map_err(|e| UssdError::CredentialError(e.to_string()))?;
        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    pub fn hash(&self, pin: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2
            .hash_password(pin.as_bytes(), &salt)
            .map_err(|e| UssdError::CredentialError(e.to_string()))?;
        Ok(hash.to_string())
    }

    /// Checks `pin` against a stored PHC string. A mismatch is `Ok(false)`;
    /// only an unparseable stored hash is an error.
    pub fn verify(&self, pin: &str, phc: &str) -> Result<bool> {
        let parsed =
            PasswordHash::new(phc).map_err(|e| UssdError::CredentialError(e.to_string()))?;
        Ok(self
            .argon2
            .verify_password(pin.as_bytes(), &parsed)
            .is_ok())
    }
}
