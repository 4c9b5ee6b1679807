use rand_chacha::ChaCha20Rng;
use rand_seeder::Seeder;

/// Generator behind every prediction. One instance per prediction; grid
/// generation and spot sampling draw from the same stream in that order.
pub type PredictorRng = ChaCha20Rng;

/// Build the deterministic generator for an arbitrary seed string.
pub fn rng_from_seed<S: AsRef<[u8]>>(seed: S) -> PredictorRng {
    Seeder::from(seed.as_ref()).into_rng::<PredictorRng>()
}

pub fn combined_seed(client_seed: &str, server_seed: &str) -> String {
    let mut seed = String::with_capacity(client_seed.len() + server_seed.len());
    seed.push_str(client_seed);
    seed.push_str(server_seed);
    seed
}
