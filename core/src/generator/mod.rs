use crate::*;
pub use random::*;

mod random;

pub trait MinefieldGenerator {
    /// Place mines for `config`, rejecting configurations that cannot leave a safe cell.
    fn generate(self, config: GameConfig) -> Result<Minefield>;
}
