//! The four built-in clinical profiles

use super::profile::{Profile, AXIS_COUNT};

pub(crate) const AXES: [&str; AXIS_COUNT] = [
    "Émotions / humeur",
    "Relations interpersonnelles",
    "Impulsivité / comportements",
    "Perception / cognition",
    "Image de soi / identité",
    "Risques / comorbidités",
];

pub(crate) fn profiles() -> Vec<Profile> {
    vec![
        Profile::new("TPB", [9, 9, 7, 6, 8, 8], "#FF6F61")
            .with_symptoms([
                "Instabilité émotionnelle",
                "Relations interpersonnelles instables",
                "Image de soi instable",
                "Impulsivité",
                "Comportements auto-agressifs",
                "Colère intense",
                "Dissociation transitoire",
                "Addictions",
            ])
            .with_comorbidities([
                "Troubles de l’humeur",
                "Troubles anxieux",
                "Addictions",
                "Troubles alimentaires",
                "Autres troubles personnalité",
            ]),
        Profile::new("Bipolarité", [8, 6, 9, 7, 7, 8], "#6B5B95")
            .with_symptoms([
                "Phase maniaque : humeur élevée/irritable, énergie excessive, logorrhée, impulsivité",
                "Phase dépressive : humeur basse, perte d’intérêt, fatigue, idées suicidaires",
                "Addictions",
            ])
            .with_comorbidities([
                "Troubles anxieux",
                "Addictions",
                "Troubles du sommeil",
                "Maladies métaboliques",
                "Comportements suicidaires",
            ]),
        Profile::new("Schizophrénie", [6, 5, 4, 9, 5, 7], "#88B04B")
            .with_symptoms([
                "Hallucinations",
                "Idées délirantes",
                "Pensée désorganisée",
                "Comportement catatonique",
                "Retrait social",
                "Affect plat",
                "Anhédonie",
                "Troubles cognitifs",
                "Addictions",
            ])
            .with_comorbidities([
                "Troubles anxieux",
                "Troubles de l’humeur",
                "Addictions",
                "Troubles personnalité",
                "Risque suicidaire",
                "Troubles métaboliques",
            ]),
        Profile::new("Pervers narcissique", [7, 9, 6, 7, 8, 8], "#FFA500")
            .with_symptoms([
                "Besoin intense d’admiration",
                "Manque d’empathie",
                "Hypersensibilité aux critiques",
                "Sentiment d’insécurité",
                "Humeur instable",
                "Addictions",
            ])
            .with_comorbidities([
                "Troubles anxieux",
                "Dépression",
                "Addictions",
                "Comportements addictifs",
                "Traits de personnalité comorbides",
                "Troubles psychosomatiques",
            ]),
    ]
}
