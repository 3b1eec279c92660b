use super::{LocaleData, StreetOrder};

pub(super) static DATA: LocaleData = LocaleData {
    male_first_names: &[
        "Jiří", "Jan", "Petr", "Josef", "Pavel", "Martin", "Tomáš", "Jaroslav", "Miroslav",
        "Zdeněk", "Václav", "Michal", "František", "Jakub", "Milan", "Karel", "Lukáš", "David",
        "Ondřej", "Vojtěch", "Radek", "Stanislav", "Vladimír", "Marek", "Filip", "Matěj",
    ],
    female_first_names: &[
        "Jana", "Marie", "Eva", "Hana", "Anna", "Lenka", "Kateřina", "Věra", "Lucie", "Alena",
        "Petra", "Jaroslava", "Veronika", "Martina", "Jitka", "Tereza", "Ludmila", "Helena",
        "Michaela", "Zdeňka", "Ivana", "Monika", "Eliška", "Barbora", "Klára", "Markéta",
    ],
    male_last_names: &[
        "Novák", "Svoboda", "Novotný", "Dvořák", "Černý", "Procházka", "Kučera", "Veselý",
        "Horák", "Němec", "Marek", "Pospíšil", "Pokorný", "Hájek", "Král", "Jelínek",
        "Růžička", "Beneš", "Fiala", "Sedláček", "Doležal", "Zeman", "Kolář", "Navrátil",
        "Čermák", "Vaněk",
    ],
    female_last_names: &[
        "Nováková", "Svobodová", "Novotná", "Dvořáková", "Černá", "Procházková", "Kučerová",
        "Veselá", "Horáková", "Němcová", "Marková", "Pospíšilová", "Pokorná", "Hájková",
        "Králová", "Jelínková", "Růžičková", "Benešová", "Fialová", "Sedláčková",
        "Doležalová", "Zemanová", "Kolářová", "Navrátilová", "Čermáková", "Vaňková",
    ],
    cities: &[
        "Praha", "Brno", "Ostrava", "Plzeň", "Liberec", "Olomouc", "České Budějovice",
        "Hradec Králové", "Ústí nad Labem", "Pardubice", "Zlín", "Havířov", "Kladno", "Most",
        "Opava", "Frýdek-Místek", "Karviná", "Jihlava", "Teplice", "Děčín", "Karlovy Vary",
        "Chomutov", "Jablonec nad Nisou", "Mladá Boleslav", "Prostějov", "Přerov", "Třebíč",
    ],
    streets: &[
        "Dlouhá", "Krátká", "Nádražní", "Školní", "Husova", "Masarykova", "Palackého",
        "Komenského", "Jiráskova", "Nerudova", "Smetanova", "Sokolská", "Zahradní", "Luční",
        "Polní", "Lesní", "Tyršova", "Žižkova", "Havlíčkova", "Riegrova", "Na Příkopě",
        "Vinohradská", "Národní", "Revoluční", "Jungmannova",
    ],
    street_order: StreetOrder::NumberLast,
    building_numbers: &["#", "##", "###", "###/##"],
    zip_codes: &["### ##"],
    email_domains: &["seznam.cz", "gmail.com", "email.cz", "post.cz", "centrum.cz"],
};
