use super::{LocaleData, StreetOrder};

const LAST_NAMES: &[&str] = &[
    "Martin", "Bernard", "Thomas", "Petit", "Robert", "Richard", "Durand", "Dubois", "Moreau",
    "Laurent", "Simon", "Michel", "Lefèvre", "Leroy", "Roux", "David", "Bertrand", "Morel",
    "Fournier", "Girard", "Bonnet", "Dupont", "Lambert", "Fontaine", "Rousseau", "Vincent",
    "Muller", "Lefebvre", "Faure", "André", "Mercier", "Blanc", "Guérin", "Boyer",
];

pub(super) static DATA: LocaleData = LocaleData {
    male_first_names: &[
        "Jean", "Pierre", "Michel", "André", "Philippe", "Louis", "Nicolas", "François",
        "Alain", "Jacques", "Bernard", "Thomas", "Hugo", "Lucas", "Théo", "Mathis", "Nathan",
        "Enzo", "Léo", "Gabriel", "Raphaël", "Arthur", "Jules", "Maxime", "Antoine", "Jérôme",
        "Jean-Luc",
    ],
    female_first_names: &[
        "Marie", "Nathalie", "Isabelle", "Sylvie", "Catherine", "Françoise", "Monique",
        "Christine", "Sophie", "Camille", "Emma", "Léa", "Chloé", "Manon", "Inès", "Jade",
        "Louise", "Zoé", "Juliette", "Céline", "Amélie", "Hélène", "Margaux", "Élise", "Anaïs",
        "Marie-Claire",
    ],
    male_last_names: LAST_NAMES,
    female_last_names: LAST_NAMES,
    cities: &[
        "Paris", "Marseille", "Lyon", "Toulouse", "Nice", "Nantes", "Strasbourg", "Montpellier",
        "Bordeaux", "Lille", "Rennes", "Reims", "Le Havre", "Saint-Étienne", "Toulon",
        "Grenoble", "Dijon", "Angers", "Nîmes", "Villeurbanne", "Clermont-Ferrand", "Le Mans",
        "Aix-en-Provence", "Brest", "Tours", "Amiens", "Limoges", "Perpignan",
    ],
    streets: &[
        "Rue de la Paix", "Rue de Rivoli", "Rue du Faubourg Saint-Honoré",
        "Avenue des Champs-Élysées", "Boulevard Saint-Germain", "Rue de la République",
        "Place de la Bastille",
        "Rue Victor Hugo", "Avenue Jean Jaurès", "Rue Pasteur", "Boulevard Voltaire",
        "Rue du Bac", "Rue de l'Église", "Rue des Écoles", "Avenue Foch", "Rue de la Gare",
        "Rue du Moulin", "Place du Marché", "Rue Nationale", "Quai des Orfèvres",
        "Rue de Vaugirard", "Impasse des Lilas", "Allée des Peupliers", "Rue Montmartre",
    ],
    street_order: StreetOrder::NumberFirst,
    building_numbers: &["#", "##", "###"],
    zip_codes: &["#####"],
    email_domains: &["gmail.com", "yahoo.fr", "hotmail.fr"],
};
