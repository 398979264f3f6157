//! Salt derivation for callers identified by a chat or user id.

/// Modulus for chat-derived salts, a compatibility constant.
pub const SALT_MODULUS: u64 = 97;

/// Derive the reading salt for a chat id.
///
/// Different chats reading the same moment get different, individually
/// deterministic results. Always in `[0, 97)`.
pub fn chat_salt(chat_id: i64) -> u32 {
    (chat_id.unsigned_abs() % SALT_MODULUS) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn salt_in_range() {
        for id in [0, 1, 96, 97, 98, 12345, i64::MAX] {
            assert!(chat_salt(id) < 97);
        }
    }

    #[test]
    fn negative_ids_use_magnitude() {
        assert_eq!(chat_salt(-12345), chat_salt(12345));
        assert!(chat_salt(i64::MIN) < 97);
    }

    #[test]
    fn known_values() {
        assert_eq!(chat_salt(0), 0);
        assert_eq!(chat_salt(97), 0);
        assert_eq!(chat_salt(100), 3);
    }
}
