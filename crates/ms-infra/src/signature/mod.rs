mod normalizer;

pub use normalizer::CidImageNormalizer;
