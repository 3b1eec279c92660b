use super::{LocaleData, StreetOrder};

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez",
    "Clark", "Ramirez", "Lewis", "Robinson", "Walker", "Young", "Allen", "King", "Wright",
    "Scott", "Torres", "Nguyen", "Hill", "Flores", "Green", "Adams", "Nelson", "Baker",
];

pub(super) static DATA: LocaleData = LocaleData {
    male_first_names: &[
        "James", "John", "Robert", "Michael", "William", "David", "Richard", "Joseph", "Thomas",
        "Charles", "Christopher", "Daniel", "Matthew", "Anthony", "Mark", "Donald", "Steven",
        "Paul", "Andrew", "Joshua", "Kenneth", "Kevin", "Brian", "George", "Timothy", "Ronald",
        "Jason", "Ryan", "Jacob", "Gary", "Nicholas", "Eric", "Tyler", "Aaron",
    ],
    female_first_names: &[
        "Mary", "Patricia", "Jennifer", "Linda", "Barbara", "Elizabeth", "Susan", "Jessica",
        "Sarah", "Karen", "Nancy", "Lisa", "Betty", "Margaret", "Sandra", "Ashley", "Kimberly",
        "Emily", "Donna", "Michelle", "Carol", "Amanda", "Melissa", "Deborah", "Stephanie",
        "Rebecca", "Laura", "Sharon", "Cynthia", "Kathleen", "Amy", "Angela", "Brenda", "Emma",
    ],
    male_last_names: LAST_NAMES,
    female_last_names: LAST_NAMES,
    cities: &[
        "New York", "Los Angeles", "Chicago", "Houston", "Phoenix", "Philadelphia",
        "San Antonio", "San Diego", "Dallas", "San Jose", "Austin", "Jacksonville",
        "Fort Worth", "Columbus", "Charlotte", "Indianapolis", "San Francisco", "Seattle",
        "Denver", "Nashville", "Oklahoma City", "Boston", "Portland", "Las Vegas", "Detroit",
        "Memphis", "Louisville", "Milwaukee", "Albuquerque", "Tucson", "Sacramento",
    ],
    streets: &[
        "Main Street", "Oak Street", "Maple Avenue", "Cedar Lane", "Elm Street", "Pine Street",
        "Washington Avenue", "Lake Drive", "Hill Road", "Park Boulevard", "Sunset Boulevard",
        "Lincoln Avenue", "Jefferson Street", "Madison Avenue", "Franklin Road", "Walnut Street",
        "Highland Avenue", "Cherry Lane", "River Road", "Forest Drive", "Spring Street",
        "Church Street", "Willow Way", "Meadow Lane", "Ridge Road",
    ],
    street_order: StreetOrder::NumberFirst,
    building_numbers: &["###", "####", "#####"],
    zip_codes: &["#####"],
    email_domains: &["gmail.com", "yahoo.com", "hotmail.com"],
};
