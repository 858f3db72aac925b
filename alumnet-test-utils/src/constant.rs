/// Secret used to sign test tokens.
pub const TEST_JWT_SECRET: &str = "test-jwt-secret";

/// Plaintext password every factory-created user can log in with.
pub const TEST_PASSWORD: &str = "correct horse battery staple";
