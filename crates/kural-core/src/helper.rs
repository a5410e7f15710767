// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Test fixtures shared by the unit tests.

use crate::corpus::Corpus;
use crate::types::entry::Entry;
use crate::types::entry::EntryId;

/// Six real kurals from five chapters. Kural 12 repeats words on purpose.
pub const SAMPLE_JSON: &str = r#"[
  {
    "number": 1,
    "sect_tam": "அறத்துப்பால்",
    "sect_eng": "Virtue",
    "chapgrp_tam": "பாயிரவியல்",
    "chapgrp_eng": "Prologue",
    "chap_tam": "கடவுள் வாழ்த்து",
    "chap_eng": "The Praise of God",
    "line1": "அகர முதல எழுத்தெல்லாம் ஆதி",
    "line2": "பகவன் முதற்றே உலகு",
    "eng": "A, as its first of letters, every speech maintains; The Primal Deity is first through all the world's domains",
    "tam_exp": "எழுத்துக்கள் எல்லாம் அகரத்தை அடிப்படையாகக் கொண்டிருக்கின்றன.",
    "eng_exp": "As the letter A is the first of all letters, so the eternal God is first in the world."
  },
  {
    "number": 2,
    "sect_tam": "அறத்துப்பால்",
    "sect_eng": "Virtue",
    "chapgrp_tam": "பாயிரவியல்",
    "chapgrp_eng": "Prologue",
    "chap_tam": "கடவுள் வாழ்த்து",
    "chap_eng": "The Praise of God",
    "line1": "கற்றதனால் ஆய பயனென்கொல் வாலறிவன்",
    "line2": "நற்றாள் தொழாஅர் எனின்",
    "eng": "No fruit have men of all their studied lore, Save they the 'Purely Wise One's' feet adore",
    "tam_exp": "தூய அறிவு வடிவாக விளங்கும் இறைவனின் திருவடிகளைத் தொழாவிட்டால் கற்ற கல்வியால் பயன் இல்லை.",
    "eng_exp": "What profit have those derived from learning, who worship not the good feet of Him who is possessed of pure knowledge?"
  },
  {
    "number": 12,
    "sect_tam": "அறத்துப்பால்",
    "sect_eng": "Virtue",
    "chapgrp_tam": "பாயிரவியல்",
    "chapgrp_eng": "Prologue",
    "chap_tam": "வான்சிறப்பு",
    "chap_eng": "The Excellence of Rain",
    "line1": "துப்பார்க்குத் துப்பாய துப்பாக்கித் துப்பார்க்குத்",
    "line2": "துப்பாய தூஉம் மழை",
    "eng": "The rain makes pure food and itself is food",
    "tam_exp": "உண்பவர்க்குத் தகுந்த உணவுப் பொருள்களை விளைவித்துத் தருவதோடு மழை தானும் உணவாகிறது.",
    "eng_exp": "Rain produces good food, and is itself food."
  },
  {
    "number": 21,
    "sect_tam": "அறத்துப்பால்",
    "sect_eng": "Virtue",
    "chapgrp_tam": "பாயிரவியல்",
    "chapgrp_eng": "Prologue",
    "chap_tam": "நீத்தார் பெருமை",
    "chap_eng": "The Greatness of Ascetics",
    "line1": "ஒழுக்கத்து நீத்தார் பெருமை விழுப்பத்து",
    "line2": "வேண்டும் பனுவல் துணிவு",
    "eng": "The settled rule of every code requires, as highest good, Their greatness who, renouncing all, true to their rule have stood",
    "tam_exp": "ஒழுக்கத்தில் நிலைத்து நின்று பற்று விட்டவர்களின் பெருமையைச் சிறந்ததாகப் போற்றுவதே நூல்களின் துணிவு.",
    "eng_exp": "The end and aim of all treatises is to extol the greatness of those ascetics."
  },
  {
    "number": 31,
    "sect_tam": "அறத்துப்பால்",
    "sect_eng": "Virtue",
    "chapgrp_tam": "பாயிரவியல்",
    "chapgrp_eng": "Prologue",
    "chap_tam": "அறன்வலியுறுத்தல்",
    "chap_eng": "Assertion of the Strength of Virtue",
    "line1": "சிறப்பீனும் செல்வமும் ஈனும் அறத்தினூஉங்கு",
    "line2": "ஆக்கம் எவனோ உயிர்க்கு",
    "eng": "It yields distinction, yields prosperity; what gain Greater than virtue can a living man obtain?",
    "tam_exp": "அறம் சிறப்பையும் செல்வத்தையும் தரும்; அதைவிட நன்மை உயிர்க்கு வேறு இல்லை.",
    "eng_exp": "Virtue will confer heaven and wealth; what greater source of happiness can man possess?"
  },
  {
    "number": 391,
    "sect_tam": "பொருட்பால்",
    "sect_eng": "Wealth",
    "chapgrp_tam": "அரசியல்",
    "chapgrp_eng": "Royalty",
    "chap_tam": "கல்வி",
    "chap_eng": "Learning",
    "line1": "கற்க கசடறக் கற்பவை கற்றபின்",
    "line2": "நிற்க அதற்குத் தக",
    "eng": "So learn that you may full and faultless learning gain, Then in obedience meet to lessons learnt remain",
    "tam_exp": "கற்கத் தகுந்த நூல்களைப் பிழையறக் கற்க வேண்டும்; கற்றபின் அதன்படி நடக்க வேண்டும்.",
    "eng_exp": "Let a man learn thoroughly whatever he may learn, and let his conduct be worthy of his learning."
  }
]"#;

pub fn sample_corpus() -> Corpus {
    Corpus::from_json(SAMPLE_JSON).unwrap()
}

/// An entry from the sample, by position in load order.
pub fn sample_entry(position: usize) -> Entry {
    sample_corpus().all()[position - 1].clone()
}

/// A synthetic corpus with ids `1..=n`, each entry in its own chapter.
pub fn numbered_corpus(n: u32) -> Corpus {
    let entries = (1..=n).map(numbered_entry).collect();
    Corpus::new(entries).unwrap()
}

pub fn numbered_entry(id: EntryId) -> Entry {
    Entry {
        id,
        section_tamil: "பால்".to_string(),
        section_english: None,
        chapter_group_tamil: "இயல்".to_string(),
        chapter_group_english: None,
        chapter_tamil: format!("chapter {}", id % 7),
        chapter_english: Some(format!("Chapter {}", id % 7)),
        line1: format!("first{id} second{id} third{id} fourth{id}"),
        line2: format!("fifth{id} sixth{id} seventh{id}"),
        translation: format!("translation of {id}"),
        explanation_primary: format!("primary explanation {id}"),
        explanation_secondary: format!("secondary explanation {id}"),
    }
}
