//! Built-in content.
//!
//! The rotation engine never reaches for these statics directly. Facades are
//! handed a [`Catalog`], and [`Catalog::builtin`] is just the default one.

use super::{RemembrancePhrase, Supplication, SupplicationCategory, Verse, VerseCategory};

/// The set of catalogs a content facade rotates through.
#[derive(Debug, Clone, Copy)]
pub struct Catalog<'a> {
    pub verses: &'a [Verse],
    pub supplications: &'a [Supplication],
    pub remembrances: &'a [RemembrancePhrase],
    pub prompts: &'a [&'a str],
}

impl Catalog<'static> {
    /// The catalog shipped with the app.
    pub fn builtin() -> Self {
        Self {
            verses: VERSES,
            supplications: SUPPLICATIONS,
            remembrances: REMEMBRANCES,
            prompts: PROMPTS,
        }
    }
}

impl<'a> Catalog<'a> {
    pub fn verses_in(&self, categories: &[VerseCategory]) -> Vec<&'a Verse> {
        self.verses
            .iter()
            .filter(|v| categories.contains(&v.category))
            .collect()
    }

    pub fn supplications_in(&self, categories: &[SupplicationCategory]) -> Vec<&'a Supplication> {
        self.supplications
            .iter()
            .filter(|s| categories.contains(&s.category))
            .collect()
    }
}

pub static VERSES: &[Verse] = &[
    Verse {
        id: "1",
        arabic: "أَلَا بِذِكْرِ اللَّهِ تَطْمَئِنُّ الْقُلُوبُ",
        translation: "Verily, in the remembrance of Allah do hearts find rest.",
        transliteration: Some("Alā bidhikri Allāhi taṭma'innu al-qulūb"),
        reference: "Surah Ar-Ra'd 13:28",
        category: VerseCategory::Stress,
    },
    Verse {
        id: "2",
        arabic: "فَإِنَّ مَعَ الْعُسْرِ يُسْرًا ۝ إِنَّ مَعَ الْعُسْرِ يُسْرًا",
        translation: "For indeed, with hardship comes ease. Indeed, with hardship comes ease.",
        transliteration: Some("Fa'inna ma'al 'usri yusrā. Inna ma'al 'usri yusrā"),
        reference: "Surah Ash-Sharh 94:5-6",
        category: VerseCategory::Hope,
    },
    Verse {
        id: "3",
        arabic: "وَمَن يَتَوَكَّلْ عَلَى اللَّهِ فَهُوَ حَسْبُهُ",
        translation: "And whoever relies upon Allah - then He is sufficient for him.",
        transliteration: Some("Wa man yatawakkal 'alā Allāhi fahuwa ḥasbuh"),
        reference: "Surah At-Talaq 65:3",
        category: VerseCategory::Trust,
    },
    Verse {
        id: "4",
        arabic: "لَا يُكَلِّفُ اللَّهُ نَفْسًا إِلَّا وُسْعَهَا",
        translation: "Allah does not burden a soul beyond that it can bear.",
        transliteration: Some("Lā yukallifu Allāhu nafsan illā wus'ahā"),
        reference: "Surah Al-Baqarah 2:286",
        category: VerseCategory::Patience,
    },
    Verse {
        id: "5",
        arabic: "وَاصْبِرْ ۚ إِنَّ اللَّهَ مَعَ الصَّابِرِينَ",
        translation: "And be patient. Indeed, Allah is with the patient.",
        transliteration: Some("Waṣbir inna Allāha ma'a aṣ-ṣābirīn"),
        reference: "Surah Al-Anfal 8:46",
        category: VerseCategory::Patience,
    },
    Verse {
        id: "6",
        arabic: "قُل لَّن يُصِيبَنَا إِلَّا مَا كَتَبَ اللَّهُ لَنَا",
        translation: "Say: Nothing will happen to us except what Allah has decreed for us.",
        transliteration: Some("Qul lan yuṣībanā illā mā kataba Allāhu lanā"),
        reference: "Surah At-Tawbah 9:51",
        category: VerseCategory::Trust,
    },
    Verse {
        id: "7",
        arabic: "وَلَا تَيْأَسُوا مِن رَّوْحِ اللَّهِ",
        translation: "And do not despair of relief from Allah.",
        transliteration: Some("Wa lā tay'asū min rawḥi Allāh"),
        reference: "Surah Yusuf 12:87",
        category: VerseCategory::Hope,
    },
    Verse {
        id: "8",
        arabic: "فَاذْكُرُونِي أَذْكُرْكُمْ وَاشْكُرُوا لِي وَلَا تَكْفُرُونِ",
        translation: "So remember Me; I will remember you. And be grateful to Me and do not deny Me.",
        transliteration: Some("Fadhkurūnī adhkurkum washkurū lī wa lā takfurūn"),
        reference: "Surah Al-Baqarah 2:152",
        category: VerseCategory::Gratitude,
    },
    Verse {
        id: "9",
        arabic: "وَنَحْنُ أَقْرَبُ إِلَيْهِ مِنْ حَبْلِ الْوَرِيدِ",
        translation: "And We are closer to him than his jugular vein.",
        transliteration: Some("Wa naḥnu aqrabu ilayhi min ḥabli al-warīd"),
        reference: "Surah Qaf 50:16",
        category: VerseCategory::Anxiety,
    },
    Verse {
        id: "10",
        arabic: "إِنَّ رَحْمَتَ اللَّهِ قَرِيبٌ مِّنَ الْمُحْسِنِينَ",
        translation: "Indeed, the mercy of Allah is near to the doers of good.",
        transliteration: Some("Inna raḥmata Allāhi qarībun min al-muḥsinīn"),
        reference: "Surah Al-A'raf 7:56",
        category: VerseCategory::Hope,
    },
];

pub static SUPPLICATIONS: &[Supplication] = &[
    Supplication {
        id: "1",
        arabic: "اللَّهُمَّ إِنِّي أَعُوذُ بِكَ مِنَ الْهَمِّ وَالْحَزَنِ",
        translation: "O Allah, I seek refuge in You from worry and grief.",
        transliteration: Some("Allāhumma innī a'ūdhu bika min al-hammi wal-ḥazan"),
        occasion: "When feeling anxious or worried",
        category: SupplicationCategory::Anxiety,
    },
    Supplication {
        id: "2",
        arabic: "حَسْبِيَ اللَّهُ لَا إِلَٰهَ إِلَّا هُوَ ۖ عَلَيْهِ تَوَكَّلْتُ",
        translation: "Sufficient for me is Allah; there is no deity except Him. On Him I have relied.",
        transliteration: Some("Ḥasbiya Allāhu lā ilāha illā huwa 'alayhi tawakkalt"),
        occasion: "When overwhelmed",
        category: SupplicationCategory::Calm,
    },
    Supplication {
        id: "3",
        arabic: "اللَّهُمَّ اجْعَلْ فِي قَلْبِي نُورًا",
        translation: "O Allah, place light in my heart.",
        transliteration: Some("Allāhumma ij'al fī qalbī nūrā"),
        occasion: "Morning prayer",
        category: SupplicationCategory::Morning,
    },
    Supplication {
        id: "4",
        arabic: "بِاسْمِكَ اللَّهُمَّ أَمُوتُ وَأَحْيَا",
        translation: "In Your name, O Allah, I die and I live.",
        transliteration: Some("Bismika Allāhumma amūtu wa aḥyā"),
        occasion: "Before sleeping",
        category: SupplicationCategory::Sleep,
    },
    Supplication {
        id: "5",
        arabic: "الْحَمْدُ لِلَّهِ الَّذِي أَحْيَانَا بَعْدَ مَا أَمَاتَنَا وَإِلَيْهِ النُّشُورُ",
        translation: "Praise be to Allah who gave us life after death, and to Him is the resurrection.",
        transliteration: Some("Alḥamdu lillāhi alladhī aḥyānā ba'da mā amātanā wa ilayhi an-nushūr"),
        occasion: "Upon waking",
        category: SupplicationCategory::Morning,
    },
    Supplication {
        id: "6",
        arabic: "اللَّهُمَّ عَافِنِي فِي بَدَنِي، اللَّهُمَّ عَافِنِي فِي سَمْعِي، اللَّهُمَّ عَافِنِي فِي بَصَرِي",
        translation: "O Allah, grant me health in my body, grant me health in my hearing, grant me health in my sight.",
        transliteration: Some("Allāhumma 'āfinī fī badanī, Allāhumma 'āfinī fī sam'ī, Allāhumma 'āfinī fī baṣarī"),
        occasion: "Daily wellness",
        category: SupplicationCategory::Morning,
    },
];

pub static REMEMBRANCES: &[RemembrancePhrase] = &[
    RemembrancePhrase {
        id: "1",
        arabic: "سُبْحَانَ اللَّهِ",
        translation: "Glory be to Allah",
        transliteration: "Subḥān Allāh",
        count: 33,
        benefit: "Purifies the heart and brings tranquility",
    },
    RemembrancePhrase {
        id: "2",
        arabic: "الْحَمْدُ لِلَّهِ",
        translation: "Praise be to Allah",
        transliteration: "Alḥamdu lillāh",
        count: 33,
        benefit: "Cultivates gratitude and inner peace",
    },
    RemembrancePhrase {
        id: "3",
        arabic: "اللَّهُ أَكْبَرُ",
        translation: "Allah is the Greatest",
        transliteration: "Allāhu Akbar",
        count: 34,
        benefit: "Reminds of Allah's majesty and power",
    },
    RemembrancePhrase {
        id: "4",
        arabic: "لَا إِلَٰهَ إِلَّا اللَّهُ",
        translation: "There is no deity except Allah",
        transliteration: "Lā ilāha illa Allāh",
        count: 100,
        benefit: "The greatest words of remembrance",
    },
    RemembrancePhrase {
        id: "5",
        arabic: "أَسْتَغْفِرُ اللَّهَ",
        translation: "I seek forgiveness from Allah",
        transliteration: "Astaghfiru Allāh",
        count: 100,
        benefit: "Brings relief from anxiety and opens doors of mercy",
    },
    RemembrancePhrase {
        id: "6",
        arabic: "لَا حَوْلَ وَلَا قُوَّةَ إِلَّا بِاللَّهِ",
        translation: "There is no power nor strength except through Allah",
        transliteration: "Lā ḥawla wa lā quwwata illā billāh",
        count: 33,
        benefit: "A treasure from Paradise, brings acceptance and surrender",
    },
];

/// Daily patience reflection prompts. Same meaning, different wording.
pub static PROMPTS: &[&str] = &[
    "You showed patience today by…",
    "A moment where you chose peace over reaction…",
    "Today, you trusted Allah's timing when…",
    "You remained calm in the face of…",
    "An act of quiet strength you're grateful for…",
    "Where did you hold back and choose patience?",
    "You preserved your inner peace when…",
    "A test you navigated with sabr…",
    "Today, patience looked like…",
    "You surrendered control and trusted by…",
    "A moment of stillness amid difficulty…",
    "You chose restraint over reaction when…",
    "Today, you persevered through…",
    "An instance where you embodied patience…",
];
