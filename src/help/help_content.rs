use crate::metrics::Language;

pub struct HelpSection {
    pub title: Option<&'static str>,
    pub entries: &'static [(&'static str, &'static str)],
    /// Free text shown under the entries
    pub notes: &'static [&'static str],
}

const SECTIONS_EN: &[HelpSection] = &[
    HelpSection {
        title: Some("COUNTING"),
        entries: &[
            ("Ctrl+L", "Toggle live update"),
            ("Ctrl+R", "Count now"),
            ("Ctrl+X", "Reset text and counts"),
        ],
        notes: &[],
    },
    HelpSection {
        title: Some("OUTPUT"),
        entries: &[
            ("Ctrl+Y", "Copy stats to clipboard"),
            ("Ctrl+Q", "Quit and print stats"),
            ("Ctrl+C", "Quit without output"),
        ],
        notes: &[],
    },
    HelpSection {
        title: Some("HELP"),
        entries: &[
            ("F1", "Toggle this help"),
            ("j/k/↑/↓", "Scroll help"),
            ("PgUp/PgDn", "Scroll help half a page"),
            ("g/G", "Jump to top/bottom"),
            ("Esc/q", "Close help"),
        ],
        notes: &[],
    },
    HelpSection {
        title: Some("USAGE"),
        entries: &[],
        notes: &[
            "Text you type or paste is only counted locally.",
            "It is never saved or sent anywhere.",
            "If large inputs feel slow, turn live update off",
            "with Ctrl+L and count with Ctrl+R.",
            "Line breaks in pasted text, including a lone CR,",
            "are entered as LF.",
        ],
    },
];

const SECTIONS_JA: &[HelpSection] = &[
    HelpSection {
        title: Some("カウント"),
        entries: &[
            ("Ctrl+L", "リアルタイムカウントの切り替え"),
            ("Ctrl+R", "カウント"),
            ("Ctrl+X", "カウントリセット"),
        ],
        notes: &[],
    },
    HelpSection {
        title: Some("出力"),
        entries: &[
            ("Ctrl+Y", "結果をクリップボードにコピー"),
            ("Ctrl+Q", "終了して結果を出力"),
            ("Ctrl+C", "出力せずに終了"),
        ],
        notes: &[],
    },
    HelpSection {
        title: Some("ヘルプ"),
        entries: &[
            ("F1", "ヘルプの表示切り替え"),
            ("j/k/↑/↓", "スクロール"),
            ("PgUp/PgDn", "半ページスクロール"),
            ("g/G", "先頭/末尾へ移動"),
            ("Esc/q", "ヘルプを閉じる"),
        ],
        notes: &[],
    },
    HelpSection {
        title: Some("使い方"),
        entries: &[],
        notes: &[
            "入力したテキストは手元でカウントするだけです。",
            "保存や送信は一切行いません。",
            "大きなテキストで動作が重い場合は Ctrl+L で",
            "リアルタイムカウントを切り、Ctrl+R でカウントしてください。",
            "貼り付けたテキストの改行は単独の CR も含めて",
            "LF として入力されます。",
        ],
    },
];

pub fn help_sections(language: Language) -> &'static [HelpSection] {
    match language {
        Language::En => SECTIONS_EN,
        Language::Ja => SECTIONS_JA,
    }
}

pub fn help_footer(language: Language) -> &'static str {
    match language {
        Language::En => "j/k: scroll | Esc/q/F1: close",
        Language::Ja => "j/k: スクロール | Esc/q/F1: 閉じる",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_keys(language: Language) -> Vec<&'static str> {
        help_sections(language)
            .iter()
            .flat_map(|section| section.entries.iter().map(|(key, _)| *key))
            .collect()
    }

    #[test]
    fn test_every_global_key_is_documented() {
        for language in [Language::En, Language::Ja] {
            let keys = all_keys(language);
            for expected in ["F1", "Ctrl+L", "Ctrl+R", "Ctrl+X", "Ctrl+Y", "Ctrl+Q", "Ctrl+C"] {
                assert!(keys.contains(&expected), "{expected} missing for {language:?}");
            }
        }
    }

    #[test]
    fn test_languages_have_matching_structure() {
        let en = help_sections(Language::En);
        let ja = help_sections(Language::Ja);
        assert_eq!(en.len(), ja.len());
        for (a, b) in en.iter().zip(ja) {
            assert_eq!(a.entries.len(), b.entries.len());
            assert_eq!(a.notes.len(), b.notes.len());
        }
    }

    #[test]
    fn test_usage_note_mentions_privacy() {
        let notes: Vec<&str> = help_sections(Language::En)
            .iter()
            .flat_map(|section| section.notes.iter().copied())
            .collect();
        assert!(notes.iter().any(|note| note.contains("never saved or sent")));
    }

    #[test]
    fn test_usage_note_explains_paste_line_breaks() {
        for language in [Language::En, Language::Ja] {
            let notes: Vec<&str> = help_sections(language)
                .iter()
                .flat_map(|section| section.notes.iter().copied())
                .collect();
            assert!(notes.iter().any(|note| note.contains("CR")), "{language:?}");
        }
    }
}
