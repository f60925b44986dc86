//! Keyword-based intent classification.
//!
//! Each entity type carries a priority-ordered dispatch table of
//! (category, keyword set) pairs. The first category whose keyword set
//! intersects the phrase wins; keyword sets may overlap across categories
//! and declaration order breaks the tie.

use scholia_common::EntityType;

/// Canonical query classes the templates cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntentCategory {
    Papers,
    Collaborators,
    Disciplines,
    Journals,
    Methods,
    Scenarios,
    Topics,
    Authors,
    Abstract,
    PublicationDate,
    Keywords,
    ImpactFactor,
}

impl IntentCategory {
    pub const ALL: [IntentCategory; 12] = [
        IntentCategory::Papers,
        IntentCategory::Collaborators,
        IntentCategory::Disciplines,
        IntentCategory::Journals,
        IntentCategory::Methods,
        IntentCategory::Scenarios,
        IntentCategory::Topics,
        IntentCategory::Authors,
        IntentCategory::Abstract,
        IntentCategory::PublicationDate,
        IntentCategory::Keywords,
        IntentCategory::ImpactFactor,
    ];
}

// ---------------------------------------------------------------------------
// Keyword sets
// ---------------------------------------------------------------------------

const COLLAB_WORDS: &[&str] = &["合作", "协作", "共同研究", "联合发表", "合著", "合作者", "合作伙伴"];
const PAPER_WORDS: &[&str] = &["论文", "文章", "发表", "成果", "出版物", "文献", "著作"];
const AUTHOR_WORDS: &[&str] = &["作者", "学者", "研究者", "教授", "专家", "科学家", "撰稿人"];
const JOURNAL_WORDS: &[&str] = &["期刊", "杂志", "学报", "会议", "出版物", "刊载", "发表刊物"];
const DISCIPLINE_WORDS: &[&str] = &["学科", "领域", "专业", "方向", "分支", "二级学科", "研究领域"];
const METHOD_WORDS: &[&str] = &["方法", "技术", "算法", "模型", "框架", "方法论", "分析技术", "计算方法"];
const SCENARIO_WORDS: &[&str] = &["应用", "场景", "实践", "实施", "使用", "应用领域", "使用场景"];
const TOPIC_WORDS: &[&str] = &["主题", "研究方向", "研究主题", "研究重点", "研究内容", "研究课题"];
const KEYWORD_WORDS: &[&str] = &["关键词", "术语", "标签", "核心词汇", "关键术语"];
const TIME_WORDS: &[&str] = &["时间", "年份", "年代", "何时", "发表时间", "出版时间", "日期"];
const FACTOR_WORDS: &[&str] = &["影响因子", "IF", "JIF", "期刊影响因子", "citation impact", "期刊评价"];
const ABSTRACT_WORDS: &[&str] = &["摘要", "概要", "内容摘要", "主要内容", "abstract", "简介", "概述", "总结", "内容简述"];

// ---------------------------------------------------------------------------
// Per-type priority tables
// ---------------------------------------------------------------------------

type PriorityTable = &'static [(IntentCategory, &'static [&'static str])];

const AUTHOR_PRIORITY: PriorityTable = &[
    (IntentCategory::Topics, TOPIC_WORDS),
    (IntentCategory::Disciplines, DISCIPLINE_WORDS),
    (IntentCategory::Journals, JOURNAL_WORDS),
    (IntentCategory::Methods, METHOD_WORDS),
    (IntentCategory::Scenarios, SCENARIO_WORDS),
    (IntentCategory::Papers, PAPER_WORDS),
    (IntentCategory::Collaborators, COLLAB_WORDS),
];

const ARTICLE_PRIORITY: PriorityTable = &[
    (IntentCategory::Abstract, ABSTRACT_WORDS),
    (IntentCategory::Authors, AUTHOR_WORDS),
    (IntentCategory::Journals, JOURNAL_WORDS),
    (IntentCategory::PublicationDate, TIME_WORDS),
    (IntentCategory::Keywords, KEYWORD_WORDS),
    (IntentCategory::Disciplines, DISCIPLINE_WORDS),
    (IntentCategory::Topics, TOPIC_WORDS),
    (IntentCategory::Methods, METHOD_WORDS),
    (IntentCategory::Scenarios, SCENARIO_WORDS),
];

const TOPIC_PRIORITY: PriorityTable = &[
    (IntentCategory::Papers, PAPER_WORDS),
    (IntentCategory::Authors, AUTHOR_WORDS),
];

const JOURNAL_PRIORITY: PriorityTable = &[
    (IntentCategory::Papers, PAPER_WORDS),
    (IntentCategory::ImpactFactor, FACTOR_WORDS),
];

const DISCIPLINE_PRIORITY: PriorityTable = &[
    (IntentCategory::Papers, PAPER_WORDS),
    (IntentCategory::Authors, AUTHOR_WORDS),
];

const METHOD_PRIORITY: PriorityTable = &[
    (IntentCategory::Authors, AUTHOR_WORDS),
    (IntentCategory::Papers, PAPER_WORDS),
];

const SCENARIO_PRIORITY: PriorityTable = &[
    (IntentCategory::Papers, PAPER_WORDS),
    (IntentCategory::Authors, AUTHOR_WORDS),
];

fn priority_table(entity_type: EntityType) -> PriorityTable {
    match entity_type {
        EntityType::Author => AUTHOR_PRIORITY,
        EntityType::Article => ARTICLE_PRIORITY,
        EntityType::Topic => TOPIC_PRIORITY,
        EntityType::Journal => JOURNAL_PRIORITY,
        EntityType::Discipline => DISCIPLINE_PRIORITY,
        EntityType::Method => METHOD_PRIORITY,
        EntityType::Scenario => SCENARIO_PRIORITY,
    }
}

/// Resolve an intent phrase to a category for the given entity type label.
/// Empty phrase or unsupported label yields no match.
pub fn classify(type_label: &str, phrase: &str) -> Option<IntentCategory> {
    let entity_type = EntityType::from_label(type_label)?;
    if phrase.trim().is_empty() {
        return None;
    }
    priority_table(entity_type)
        .iter()
        .find(|(_, words)| words.iter().any(|word| phrase.contains(word)))
        .map(|(category, _)| *category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn author_paper_phrase_resolves_to_papers() {
        assert_eq!(
            classify("Author", "查询学者的论文列表"),
            Some(IntentCategory::Papers)
        );
    }

    #[test]
    fn declaration_order_breaks_keyword_overlap() {
        // 期刊 (Journals) is declared before 论文 (Papers) for Author.
        assert_eq!(
            classify("Author", "他的论文都发表在哪些期刊"),
            Some(IntentCategory::Journals)
        );
    }

    #[test]
    fn article_abstract_wins_over_later_categories() {
        assert_eq!(
            classify("Article", "这篇文章的摘要和关键词"),
            Some(IntentCategory::Abstract)
        );
    }

    #[test]
    fn journal_factor_phrase_resolves() {
        assert_eq!(
            classify("Journal", "这本期刊的影响因子是多少"),
            // 期刊 is not in the Journal table; Papers' 发表 is absent too.
            Some(IntentCategory::ImpactFactor)
        );
    }

    #[test]
    fn empty_phrase_or_unknown_type_miss() {
        assert_eq!(classify("Author", ""), None);
        assert_eq!(classify("Author", "   "), None);
        assert_eq!(classify("Organization", "查询论文"), None);
    }

    #[test]
    fn unmatched_phrase_misses() {
        assert_eq!(classify("Author", "天气怎么样"), None);
    }
}
