pub mod greedy;
pub mod model;
pub mod random;

pub use greedy::GreedyAI;
pub use model::ModelAI;
pub use random::RandomAI;
