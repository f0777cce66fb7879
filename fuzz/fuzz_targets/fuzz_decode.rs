#![no_main]

use libfuzzer_sys::fuzz_target;
use tpm_wire::core::Marshal;
use tpm_wire::types::{Tpm2bPublic, TpmtPublic, TpmtSigScheme};

fuzz_target!(|data: &[u8]| {
    // Fuzz structure deserialization - test for panics, crashes, infinite loops
    let _ = Tpm2bPublic::decode(data);
    let _ = TpmtPublic::decode(data);
    let _ = TpmtSigScheme::decode(data);

    // If arbitrary bytes happen to decode, the roundtrip must hold
    if let Ok(public) = Tpm2bPublic::decode(data) {
        if let Ok(reencoded) = public.encode() {
            assert_eq!(reencoded, data);
        }
    }
});
