//! # Structure Catalog
//!
//! Representative wire structures built on the core contract. The full TPM
//! catalog is thousands of mechanically similar definitions generated from
//! the specification tables; this module carries the subset that exercises
//! every codec path: algorithm selectors, raw sized buffers, scheme unions
//! with their tagged carriers, and the nested public-area composition.

pub mod alg;
pub mod buffers;
pub mod public;
pub mod schemes;

pub use alg::TpmAlgId;
pub use buffers::{Tpm2bData, Tpm2bDigest};
pub use public::{PublicParms, Tpm2bPublic, TpmtPublic};
pub use schemes::{KdfScheme, SigScheme, TpmtKdfScheme, TpmtSigScheme};
