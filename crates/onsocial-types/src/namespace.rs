//! Key-id namespaces for `seal_approve*`.
//!
//! A key id belongs to an entity when it starts with that entity's object id
//! bytes; whatever follows the prefix is caller-chosen.

pub fn in_namespace(id: &[u8], namespace: &[u8]) -> bool {
    !namespace.is_empty() && id.starts_with(namespace)
}

pub fn key_id(namespace: &[u8], nonce: &[u8]) -> Vec<u8> {
    let mut id = Vec::with_capacity(namespace.len() + nonce.len());
    id.extend_from_slice(namespace);
    id.extend_from_slice(nonce);
    id
}
