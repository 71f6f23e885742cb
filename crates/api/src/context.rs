use innkeep_core::AdminId;

/// Authenticated admin identity for a request.
///
/// Handlers that mutate the catalog, booking statuses, or the expense
/// ledger take this as an extractor argument; its presence in the
/// signature is what gates the endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminContext {
    admin_id: AdminId,
    username: String,
}

impl AdminContext {
    pub fn new(admin_id: AdminId, username: String) -> Self {
        Self { admin_id, username }
    }

    pub fn admin_id(&self) -> AdminId {
        self.admin_id
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}
