use super::{Category, CompoundSpec};

/// Builds a record from the six core scores, in the order
/// anabolic, androgenic, hepatotoxicity, cardiotoxicity, HPTA suppression, nephrotoxicity.
fn compound(name: &str, category: Category, half_life_days: f64, scores: [f64; 6]) -> CompoundSpec {
    let [anabolic, androgenic, hepatotoxicity, cardiotoxicity, hpta_suppression, nephrotoxicity] =
        scores;

    CompoundSpec {
        anabolic,
        androgenic,
        hepatotoxicity,
        cardiotoxicity,
        hpta_suppression,
        nephrotoxicity,
        ..CompoundSpec::new(name, category, half_life_days)
    }
}

pub(super) fn standard_compounds() -> Vec<CompoundSpec> {
    use Category::*;

    vec![
        // Base hormones
        compound("Testosterone Enanthate", BaseHormone, 7.0, [8.0, 8.0, 1.0, 5.0, 9.0, 2.0]),
        compound("Testosterone Cypionate", BaseHormone, 8.0, [8.0, 8.0, 1.0, 5.0, 9.0, 2.0]),
        compound("Testosterone Propionate", BaseHormone, 2.0, [8.0, 8.0, 1.0, 5.0, 9.0, 2.0]),
        compound("Trenbolone Acetate", BaseHormone, 3.0, [10.0, 10.0, 3.0, 9.0, 10.0, 8.0]),
        compound("Trenbolone Enanthate", BaseHormone, 7.0, [10.0, 10.0, 3.0, 9.0, 10.0, 8.0]),
        compound("Nandrolone Decanoate", BaseHormone, 14.0, [9.0, 3.0, 1.0, 4.0, 10.0, 3.0]),
        compound("Oxandrolone (Anavar)", BaseHormone, 0.5, [5.0, 2.0, 5.0, 3.0, 3.0, 2.0]),
        compound("Metandienone (Dianabol)", BaseHormone, 0.25, [7.0, 5.0, 8.0, 6.0, 8.0, 4.0]),
        compound("Drostanolone (Masteron)", BaseHormone, 2.5, [6.0, 4.0, 2.0, 6.0, 4.0, 3.0]),
        compound("Stanozolol (Winstrol)", BaseHormone, 0.4, [6.0, 3.0, 9.0, 9.0, 5.0, 6.0]),
        // Selective modulators
        compound("Ostarine (MK-2866)", SelectiveModulator, 1.0, [4.0, 1.0, 3.0, 2.0, 4.0, 1.0]),
        compound("Ligandrol (LGD-4033)", SelectiveModulator, 1.2, [6.0, 2.0, 4.0, 3.0, 7.0, 2.0]),
        compound("Testolone (RAD-140)", SelectiveModulator, 2.5, [7.0, 3.0, 4.0, 4.0, 8.0, 3.0]),
        // Peptides
        compound("BPC-157", Peptide, 0.2, [1.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
        compound("TB-500", Peptide, 2.0, [1.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
        compound("Ipamorelin", Peptide, 0.1, [2.0, 0.0, 0.0, 1.0, 1.0, 0.0]),
        compound("CJC-1295 (with DAC)", Peptide, 8.0, [3.0, 0.0, 0.0, 2.0, 2.0, 1.0]),
        // Hormones
        compound("Growth Hormone (GH)", Hormone, 0.2, [5.0, 0.0, 1.0, 3.0, 2.0, 2.0]),
        compound("Insulin (Humalog)", Hormone, 0.1, [9.0, 0.0, 1.0, 2.0, 1.0, 1.0]),
        // Anti-estrogens, used post-cycle
        CompoundSpec {
            hpta_stimulation: Some(8.0),
            estrogen_blockade: Some(5.0),
            ..compound("Clomiphene (Clomid)", AntiEstrogen, 5.0, [0.0, 0.0, 2.0, 1.0, 0.0, 1.0])
        },
        CompoundSpec {
            hpta_stimulation: Some(7.0),
            estrogen_blockade: Some(8.0),
            ..compound("Tamoxifen (Nolvadex)", AntiEstrogen, 7.0, [0.0, 0.0, 2.0, 0.0, 0.0, 1.0])
        },
        // On-cycle support
        CompoundSpec {
            estrogen_reduction: Some(0.5),
            ..compound("Anastrozole (Arimidex)", Support, 2.0, [0.0, 0.0, 1.0, 2.0, 0.0, 0.0])
        },
        CompoundSpec {
            estrogen_reduction: Some(0.65),
            ..compound("Exemestane (Aromasin)", Support, 1.0, [0.0, 0.0, 1.0, 1.0, 0.0, 0.0])
        },
        CompoundSpec {
            blood_pressure_reduction: Some(10.0),
            ..compound("Telmisartan", Support, 1.0, [0.0; 6])
        },
    ]
}
