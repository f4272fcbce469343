mod bernoulli;

pub use bernoulli::{BernoulliGenerator, GeneratorError};
