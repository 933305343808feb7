//! Nickname and descriptive-word table.

pub(crate) const NICKNAMES: &[(&str, &str)] = &[
    // Irregular short forms.
    ("Bert", "Type=Short Long=Albert,Bertram,Herbert"),
    ("Bess", "Type=Short Long=Elizabeth"),
    ("Betsy", "Type=Short Long=Elizabeth"),
    ("Bill", "Type=Short Long=William,Wilhelm"),
    ("Bob", "Type=Short Long=Robert"),
    ("Chuck", "Type=Short Long=Charles"),
    ("Dick", "Type=Short Long=Richard"),
    ("Gus", "Type=Short Long=August,Augustus"),
    ("Hal", "Type=Short Long=Harold,Henry"),
    ("Hank", "Type=Short Long=Henry,Heinrich"),
    ("Jack", "Type=Short Long=John,Johann"),
    ("Jeb", "Type=Short Long=Jebediah"),
    ("Jim", "Type=Short Long=James"),
    ("Kate", "Type=Short Long=Catherine,Kathleen"),
    ("Lem", "Type=Short Long=Lemuel"),
    ("Molly", "Type=Short Long=Mary,Maria"),
    ("Nan", "Type=Short Long=Anna,Hannah"),
    ("Ned", "Type=Short Long=Edward"),
    ("Patsy", "Type=Short Long=Martha,Patrick"),
    ("Peggy", "Type=Short Long=Margaret,Marguerite"),
    ("Polly", "Type=Short Long=Mary"),
    ("Rick", "Type=Short Long=Richard,Friedrich"),
    ("Sally", "Type=Short Long=Sarah"),
    ("Ted", "Type=Short Long=Edward,Thomas"),
    ("Zeke", "Type=Short Long=Ezekiel"),
    // Adjectives.
    ("Big", "Type=Adjective"),
    ("Black", "Type=Adjective"),
    ("Crooked", "Type=Adjective"),
    ("Dusty", "Type=Adjective"),
    ("Honest", "Type=Adjective"),
    ("Little", "Type=Adjective"),
    ("Lonesome", "Type=Adjective"),
    ("Lucky", "Type=Adjective"),
    ("Mad", "Type=Adjective"),
    ("Quick", "Type=Adjective"),
    ("Red", "Type=Adjective"),
    ("Silent", "Type=Adjective"),
    ("Tall", "Type=Adjective"),
    ("Wild", "Type=Adjective"),
    // Animals and how they move.
    ("Bear", "Type=Animal Move=Walks,Lumbers"),
    ("Buffalo", "Type=Animal Move=Runs,Thunders"),
    ("Coyote", "Type=Animal Move=Lopes,Slinks"),
    ("Crow", "Type=Animal Move=Flies,Hops"),
    ("Eagle", "Type=Animal Move=Soars,Flies"),
    ("Elk", "Type=Animal Move=Bounds,Runs"),
    ("Fox", "Type=Animal Move=Prowls,Slinks"),
    ("Hawk", "Type=Animal Move=Soars"),
    ("Horse", "Type=Animal Move=Gallops,Runs"),
    ("Mule", "Type=Animal"),
    ("Rattler", "Type=Animal Move=Slithers,Coils"),
    ("Turtle", "Type=Animal Move=Crawls"),
    ("Wolf", "Type=Animal Move=Prowls,Runs"),
    // Nature.
    ("Cloud", "Type=Nature"),
    ("Fire", "Type=Nature"),
    ("Moon", "Type=Nature"),
    ("Mountain", "Type=Nature"),
    ("Rain", "Type=Nature"),
    ("River", "Type=Nature"),
    ("Sky", "Type=Nature"),
    ("Star", "Type=Nature"),
    ("Stone", "Type=Nature"),
    ("Sun", "Type=Nature"),
    ("Thunder", "Type=Nature"),
    ("Wind", "Type=Nature"),
    // Nouns.
    ("Ace", "Type=Noun"),
    ("Bullet", "Type=Noun"),
    ("Deuce", "Type=Noun"),
    ("Doc", "Type=Noun"),
    ("Dutch", "Type=Noun"),
    ("Judge", "Type=Noun"),
    ("Kid", "Type=Noun"),
    ("Lefty", "Type=Noun"),
    ("Preacher", "Type=Noun"),
    ("Slim", "Type=Noun"),
    ("Tex", "Type=Noun"),
    ("Whiskey", "Type=Noun"),
    // Prepositions.
    ("Above", "Type=Preposition"),
    ("Across", "Type=Preposition"),
    ("Against", "Type=Preposition"),
    ("Among", "Type=Preposition"),
    ("Behind", "Type=Preposition"),
    ("Beneath", "Type=Preposition"),
    ("Beside", "Type=Preposition"),
    ("Beyond", "Type=Preposition"),
    ("Under", "Type=Preposition"),
    ("With", "Type=Preposition"),
    // Verbs.
    ("Dances", "Type=Verb"),
    ("Dreams", "Type=Verb"),
    ("Hunts", "Type=Verb"),
    ("Laughs", "Type=Verb"),
    ("Sings", "Type=Verb"),
    ("Sleeps", "Type=Verb"),
    ("Speaks", "Type=Verb"),
    ("Stands", "Type=Verb"),
    ("Watches", "Type=Verb"),
    ("Weeps", "Type=Verb"),
];
