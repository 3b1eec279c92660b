use super::{LocaleData, StreetOrder};

const LAST_NAMES: &[&str] = &[
    "Smith", "Jones", "Taylor", "Brown", "Williams", "Wilson", "Johnson", "Davies", "Robinson",
    "Wright", "Thompson", "Evans", "Walker", "White", "Roberts", "Green", "Hall", "Wood",
    "Jackson", "Clarke", "Patel", "Khan", "Lewis", "James", "Phillips", "Mason", "Mitchell",
    "Rose", "Davis", "Rodgers", "Ward", "Hughes", "Edwards", "Harris", "Turner", "Cooper",
];

pub(super) static DATA: LocaleData = LocaleData {
    male_first_names: &[
        "Oliver", "George", "Harry", "Jack", "Jacob", "Noah", "Charlie", "Thomas", "Oscar",
        "William", "James", "Henry", "Leo", "Alfie", "Joshua", "Freddie", "Archie", "Ethan",
        "Isaac", "Alexander", "Joseph", "Edward", "Samuel", "Max", "Daniel", "Arthur",
    ],
    female_first_names: &[
        "Olivia", "Amelia", "Isla", "Ava", "Emily", "Isabella", "Mia", "Poppy", "Ella", "Lily",
        "Grace", "Sophie", "Evie", "Charlotte", "Jessica", "Ruby", "Freya", "Sophia", "Florence",
        "Daisy", "Chloe", "Alice", "Matilda", "Phoebe", "Harriet", "Eleanor",
    ],
    male_last_names: LAST_NAMES,
    female_last_names: LAST_NAMES,
    cities: &[
        "London", "Birmingham", "Manchester", "Leeds", "Sheffield", "Bristol", "Liverpool",
        "Newcastle upon Tyne", "Nottingham", "Leicester", "Southampton", "Brighton", "Plymouth",
        "Reading", "Norwich", "York", "Cambridge", "Oxford", "Bath", "Exeter", "Chester",
        "Edinburgh", "Glasgow", "Cardiff", "Swansea", "Belfast",
    ],
    streets: &[
        "High Street", "Station Road", "Main Street", "Park Road", "Church Road", "Church Street",
        "London Road", "Victoria Road", "Green Lane", "Manor Road", "Church Lane", "Park Avenue",
        "The Avenue", "The Crescent", "Queens Road", "New Road", "Grange Road", "Kings Road",
        "Kingsway", "Windsor Road", "Highfield Road", "Mill Lane", "Alexander Road", "York Road",
        "St. John's Road", "Baker Street",
    ],
    street_order: StreetOrder::NumberFirst,
    building_numbers: &["#", "##", "###"],
    zip_codes: &["??# #??", "??## #??"],
    email_domains: &["gmail.com", "yahoo.com", "hotmail.com"],
};
