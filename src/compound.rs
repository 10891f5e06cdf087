use serde::{Deserialize, Serialize};

/// One carbon chain: the main chain or an attached side chain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Chain {
    size: usize,
    cyclo: bool,
    /// Locant on the main chain this side chain is attached to.
    /// `None` for the main chain itself, or while unplaced.
    location: Option<usize>,
}

impl Chain {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cyclo: false,
            location: None,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn set_size(&mut self, size: usize) {
        self.size = size;
    }

    pub fn is_cyclo(&self) -> bool {
        self.cyclo
    }

    pub fn set_cyclo(&mut self, cyclo: bool) {
        self.cyclo = cyclo;
    }

    pub fn location(&self) -> Option<usize> {
        self.location
    }

    pub fn set_location(&mut self, locant: usize) {
        self.location = Some(locant);
    }
}

/// The compound under construction: what has actually been committed
/// to the canvas, nothing more.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Compound {
    main: Chain,
    sides: Vec<Chain>,
    /// Highest bond order placed so far (0 while no multiple bond).
    max_bond_order: u8,
}

impl Compound {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn main(&self) -> &Chain {
        &self.main
    }

    pub fn main_mut(&mut self) -> &mut Chain {
        &mut self.main
    }

    pub fn sides(&self) -> &[Chain] {
        &self.sides
    }

    pub fn add_side(&mut self, chain: Chain) {
        self.sides.push(chain);
    }

    pub fn last_side_mut(&mut self) -> Option<&mut Chain> {
        self.sides.last_mut()
    }

    pub fn remove_last_side(&mut self) -> Option<Chain> {
        self.sides.pop()
    }

    /// Drop side chains that were never attached to a locant.
    pub fn retain_placed_sides(&mut self) {
        self.sides.retain(|c| c.location().is_some());
    }

    pub fn max_bond_order(&self) -> u8 {
        self.max_bond_order
    }

    pub fn record_bond_order(&mut self, order: u8) {
        if order > self.max_bond_order {
            self.max_bond_order = order;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bond_order_only_ratchets_up() {
        let mut c = Compound::new();
        c.record_bond_order(3);
        c.record_bond_order(2);
        assert_eq!(c.max_bond_order(), 3);
    }

    #[test]
    fn side_chains_accumulate_with_locations() {
        let mut c = Compound::new();
        c.main_mut().set_size(6);
        c.add_side(Chain::new(2));
        c.last_side_mut().unwrap().set_location(3);
        c.add_side(Chain::new(1));
        c.last_side_mut().unwrap().set_location(4);
        assert_eq!(c.sides().len(), 2);
        assert_eq!(c.sides()[0].location(), Some(3));
        assert_eq!(c.sides()[1].size(), 1);
    }

    #[test]
    fn abandoning_a_side_chain_pops_it() {
        let mut c = Compound::new();
        c.add_side(Chain::new(2));
        assert!(c.remove_last_side().is_some());
        assert!(c.sides().is_empty());
    }
}
