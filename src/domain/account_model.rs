use std::fmt;

/// Cryptographic scheme of a generated account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountModel {
    /// Solana-style account: Ed25519 keypair, base58 address
    Ed25519Account,
    /// EVM-style account: secp256k1 key derived from a BIP-39 mnemonic
    Secp256k1Account,
}

impl AccountModel {
    /// Every supported model, in generation order
    pub const ALL: [AccountModel; 2] = [Self::Ed25519Account, Self::Secp256k1Account];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ed25519Account => "ed25519",
            Self::Secp256k1Account => "secp256k1",
        }
    }

    /// Default storage slot name for this model
    pub fn default_slot_name(&self) -> &'static str {
        match self {
            Self::Ed25519Account => "solana",
            Self::Secp256k1Account => "evm",
        }
    }

    /// Label used in the console report
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Ed25519Account => "SOLANA WALLET",
            Self::Secp256k1Account => "EVM WALLET (ETH, Base, Arbitrum, etc.)",
        }
    }
}

impl fmt::Display for AccountModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_scheme_name() {
        assert_eq!(AccountModel::Ed25519Account.to_string(), "ed25519");
        assert_eq!(AccountModel::Secp256k1Account.to_string(), "secp256k1");
    }

    #[test]
    fn test_default_slot_names() {
        assert_eq!(AccountModel::Ed25519Account.default_slot_name(), "solana");
        assert_eq!(AccountModel::Secp256k1Account.default_slot_name(), "evm");
    }
}
