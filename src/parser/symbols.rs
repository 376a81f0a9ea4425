use crate::types::{Address, Var};

type Addresses = fnv::FnvHashMap<Var, Address>;

/// Flat global storage: every name gets the next free address on first sight.
#[derive(Debug, Default)]
pub struct SymbolTable {
    addresses: Addresses,
    names: Vec<Var>, // address -> name
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable::default()
    }

    pub fn resolve(&mut self, name: &str) -> Address {
        if let Some(&address) = self.addresses.get(name) {
            return address;
        }

        let address = self.names.len();
        self.names.push(name.to_string());
        self.addresses.insert(name.to_string(), address);
        address
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<Address> {
        self.addresses.get(name).copied()
    }

    /// Names ordered by address
    pub fn into_names(self) -> Vec<Var> {
        self.names
    }
}
