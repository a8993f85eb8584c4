//! Curve and field parameters for vapor address derivation.
//!
//! Two prime fields are in play: the BN254 scalar field `R` carries secrets
//! and the sponge state, while the ed25519 base field `P` carries point
//! coordinates. The round-constant table is a fixed protocol parameter
//! (the circom/Noir BN254 set) - it must never be regenerated, or every
//! previously derived address becomes unverifiable.

use lazy_static::lazy_static;
use num_bigint::BigUint;
use num_traits::Num;

/// Version tag for the sponge parameter set. Bump on any change to the
/// table or schedule; never mutate in place.
pub const ROUND_CONSTANTS_VERSION: u32 = 1;

/// Number of sponge rounds applied after absorbing each input.
pub const ABSORB_ROUNDS: usize = 8;

/// Number of final mixing rounds after all inputs are absorbed.
pub const FINAL_ROUNDS: usize = 4;

/// Raw decimal strings for the 16 round constants, imported verbatim.
const ROUND_CONSTANT_STRS: [&str; 16] = [
    "14397397413755236225575615486459253198602422701513067526754101844196324375522",
    "10405129301473404666785234951972711717481302463898292859783056520670200613128",
    "5179144822360023508491245509308555580251733042407187134628755730783052214509",
    "9132640374240188374542843306219594180154739721841249568925550236430986592615",
    "20360807315276763881209958738450444293273549928693737723235350358403012458514",
    "17933600965499023212689924809448543050840131883187652471064418452962948061619",
    "3636213416533737411392076250708419981662897009810345015164671602334517041153",
    "2008540005368330234524962342006691994500273283000229509835662097352946198608",
    "16018407964853379535338740313053768402596521780991140819786560130595652651567",
    "20653139667070586705378398435856186172195806027708437373983929336015162186471",
    "17887713874711369695406927657694993484804203950786668963083965074738838960704",
    "4852706232225925756777361208698488277369799648067343227630786518486608711772",
    "8969172011633935669771678412400911310465619639756845342775631896478908389850",
    "20570199545627577691240476121888846460936245025392381957866134167601058684375",
    "16442329894745639881165035015179028112772410105963688121820543219662832524136",
    "20060625627350485876280451423010593928172611031611836167979515653463693899374",
];

lazy_static! {
    /// Ed25519 base field prime, p = 2^255 - 19.
    pub static ref ED25519_P: BigUint = BigUint::from_str_radix(
        "57896044618658097711785492504343953926634992332820282019728792003956564819949",
        10,
    )
    .expect("ed25519 prime literal");

    /// Ed25519 twisted Edwards constant, d = -121665/121666 mod p.
    pub static ref ED25519_D: BigUint = BigUint::from_str_radix(
        "37095705934669439343138083508754565189542113879843219016388785533085940283555",
        10,
    )
    .expect("ed25519 d literal");

    /// BN254 scalar field modulus r. Secrets and sponge state live here.
    pub static ref BN254_R: BigUint = BigUint::from_str_radix(
        "21888242871839275222246405745257275088548364400416034343698204186575808495617",
        10,
    )
    .expect("bn254 r literal");

    /// Initial sponge state (domain constant).
    pub static ref SPONGE_IV: BigUint =
        BigUint::from_str_radix("736f6c616e61766170b6f72", 16).expect("sponge iv literal");

    /// Round constants for the field sponge, version 1.
    pub static ref ROUND_CONSTANTS: Vec<BigUint> = ROUND_CONSTANT_STRS
        .iter()
        .map(|s| BigUint::from_str_radix(s, 10).expect("round constant literal"))
        .collect();
}
