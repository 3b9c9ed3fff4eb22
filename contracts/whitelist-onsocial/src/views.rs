use crate::*;

#[near]
impl Contract {
    pub fn get_whitelist(&self, whitelist_id: ObjectId) -> Option<WhitelistView> {
        let whitelist = self.whitelists.get(&whitelist_id)?;
        let token_gate = whitelist
            .tga_id
            .and_then(|tga_id| self.tgas.get(&tga_id))
            .map(|tga| tga.gate.clone());
        Some(whitelist.view(token_gate))
    }

    pub fn get_members(
        &self,
        whitelist_id: ObjectId,
        from_index: Option<u32>,
        limit: Option<u32>,
    ) -> Vec<AccountId> {
        let Some(whitelist) = self.whitelists.get(&whitelist_id) else {
            return Vec::new();
        };
        let start = from_index.unwrap_or(0) as usize;
        let limit = limit
            .unwrap_or(self.config.max_page_size)
            .min(self.config.max_page_size) as usize;
        whitelist
            .members
            .iter()
            .skip(start)
            .take(limit)
            .cloned()
            .collect()
    }

    pub fn is_member(&self, whitelist_id: ObjectId, account_id: AccountId) -> bool {
        self.whitelists
            .get(&whitelist_id)
            .is_some_and(|whitelist| whitelist.is_member(&account_id))
    }

    pub fn get_cap(&self, cap_id: ObjectId) -> Option<Cap> {
        self.caps.get(&cap_id).cloned()
    }

    /// Caps held by `account_id`, optionally narrowed to one whitelist.
    pub fn get_caps_for(&self, account_id: AccountId, whitelist_id: Option<ObjectId>) -> Vec<Cap> {
        let Some(held) = self.caps_by_holder.get(&account_id) else {
            return Vec::new();
        };
        held.iter()
            .filter_map(|cap_id| self.caps.get(cap_id))
            .filter(|cap| whitelist_id.is_none_or(|id| cap.whitelist_id == id))
            .cloned()
            .collect()
    }

    pub fn get_tga(&self, tga_id: ObjectId) -> Option<Tga> {
        self.tgas.get(&tga_id).cloned()
    }
}
