#![no_main]
#[macro_use] extern crate libfuzzer_sys;
extern crate daala_tx;
use daala_tx::fuzzing::*;

fuzz_target!(|data: ArbitraryBlock| {
  let _ = pretty_env_logger::try_init();

  fuzz_roundtrip(data)
});
