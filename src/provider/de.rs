use super::{LocaleData, StreetOrder};

const LAST_NAMES: &[&str] = &[
    "Müller", "Schmidt", "Schneider", "Fischer", "Weber", "Meyer", "Wagner", "Becker",
    "Schulz", "Hoffmann", "Schäfer", "Koch", "Bauer", "Richter", "Klein", "Wolf", "Schröder",
    "Neumann", "Schwarz", "Zimmermann", "Braun", "Krüger", "Hofmann", "Hartmann", "Lange",
    "Schmitt", "Werner", "Krause", "Meier", "Lehmann", "Schmid", "Schulze", "Maier", "Köhler",
];

pub(super) static DATA: LocaleData = LocaleData {
    male_first_names: &[
        "Peter", "Michael", "Thomas", "Andreas", "Wolfgang", "Klaus", "Jürgen", "Stefan",
        "Christian", "Uwe", "Werner", "Frank", "Matthias", "Jörg", "Lukas", "Leon", "Finn",
        "Jonas", "Paul", "Elias", "Felix", "Maximilian", "Tobias", "Sebastian", "Florian",
        "Dieter", "Günter",
    ],
    female_first_names: &[
        "Ursula", "Sabine", "Monika", "Petra", "Claudia", "Susanne", "Andrea", "Renate",
        "Birgit", "Karin", "Anna", "Emma", "Mia", "Hannah", "Sophie", "Lena", "Lea", "Marie",
        "Johanna", "Katharina", "Julia", "Laura", "Jana", "Franziska", "Gisela", "Jutta",
        "Käthe", "Brigitte",
    ],
    male_last_names: LAST_NAMES,
    female_last_names: LAST_NAMES,
    cities: &[
        "Berlin", "Hamburg", "München", "Köln", "Frankfurt am Main", "Stuttgart", "Düsseldorf",
        "Leipzig", "Dortmund", "Essen", "Bremen", "Dresden", "Hannover", "Nürnberg", "Duisburg",
        "Bochum", "Wuppertal", "Bielefeld", "Bonn", "Münster", "Mannheim", "Karlsruhe",
        "Augsburg", "Wiesbaden", "Mönchengladbach", "Gelsenkirchen", "Aachen", "Kiel",
        "Freiburg im Breisgau", "Lübeck",
    ],
    streets: &[
        "Hauptstraße", "Schulstraße", "Gartenstraße", "Bahnhofstraße", "Dorfstraße",
        "Bergstraße", "Birkenweg", "Lindenstraße", "Kirchstraße", "Waldstraße", "Ringstraße",
        "Schillerstraße", "Goethestraße", "Mühlenweg", "Am Sportplatz", "Wiesenweg",
        "Jahnstraße", "Friedhofstraße", "Rosenstraße", "Feldstraße", "Marktplatz",
        "Beethovenstraße", "Mozartstraße", "Amselweg", "Unter den Linden",
    ],
    street_order: StreetOrder::NumberLast,
    building_numbers: &["#", "##", "###"],
    zip_codes: &["#####"],
    email_domains: &["gmail.com", "yahoo.com", "hotmail.com", "web.de", "gmx.de"],
};
