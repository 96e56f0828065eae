//! Channel records: membership, privileges, and the i/k/l/t mode flags.

use super::ClientId;

/// New channels admit this many members until `+l` says otherwise.
const DEFAULT_USER_LIMIT: usize = 1000;

/// One named channel.
///
/// Members are kept in join order (the names list and admin succession
/// both depend on it); the operator set is a subset of the members.
#[derive(Debug)]
pub struct Channel {
    name: String,
    pub admin: ClientId,
    pub members: Vec<ClientId>,
    pub operators: Vec<ClientId>,
    /// `+i`
    pub invite_only: bool,
    /// `+k`; empty means no key. A channel created by `JOIN <name> <key>`
    /// is born with that key.
    pub key: String,
    /// `+l`; 0 means unlimited.
    pub user_limit: usize,
    /// `+t`
    pub topic_restricted: bool,
    pub topic: String,
}

impl Channel {
    pub fn new(name: &str, key: &str, admin: ClientId) -> Self {
        Self {
            name: name.to_string(),
            admin,
            members: Vec::new(),
            operators: Vec::new(),
            invite_only: false,
            key: key.to_string(),
            user_limit: DEFAULT_USER_LIMIT,
            topic_restricted: false,
            topic: String::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_member(&self, id: ClientId) -> bool {
        self.members.contains(&id)
    }

    pub fn is_operator(&self, id: ClientId) -> bool {
        self.operators.contains(&id)
    }

    /// Admin and operators may change modes, kick, and set a restricted
    /// topic.
    pub fn can_moderate(&self, id: ClientId) -> bool {
        self.admin == id || self.is_operator(id)
    }

    /// Append a member; the first member of a channel becomes its admin
    /// and first operator.
    pub fn add_member(&mut self, id: ClientId) {
        if self.members.is_empty() {
            self.admin = id;
            self.grant_operator(id);
        }
        self.members.push(id);
    }

    /// Drop a member from both the member list and the operator set.
    /// When the admin leaves and members remain, the oldest remaining
    /// member inherits the channel.
    pub fn remove_member(&mut self, id: ClientId) {
        self.operators.retain(|m| *m != id);
        self.members.retain(|m| *m != id);
        if self.admin == id {
            if let Some(first) = self.members.first() {
                self.admin = *first;
            }
        }
    }

    pub fn grant_operator(&mut self, id: ClientId) {
        if !self.operators.contains(&id) {
            self.operators.push(id);
        }
    }

    pub fn revoke_operator(&mut self, id: ClientId) {
        self.operators.retain(|m| *m != id);
    }

    pub fn at_limit(&self) -> bool {
        self.user_limit > 0 && self.members.len() >= self.user_limit
    }
}
