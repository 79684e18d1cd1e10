// Copyright (c) 2026 shard-rewrite contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Parse-rule registry: per-(dialect, shape) statement rules and
//! per-(dialect, segment-kind) segment fillers.

use crate::error::{ParseRuleError, ParseRuleResult};
use crate::filler::{
    ColumnDefinitionFiller, PaginationFiller, PredicateFiller, SegmentFiller,
    SetAssignmentsFiller, TableFiller,
};
use serde::{Deserialize, Serialize};
use shard_rewrite_ast::{Dialect, SegmentKind, StatementKind};
use std::collections::HashMap;
use std::sync::OnceLock;
use tracing::debug;

/// The three parse-rule families.
///
/// Each family owns an independent registry instance with its own
/// registration namespace; they never share state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleFamily {
    /// General sharding parsing
    Sharding,
    /// Encryption-aware parsing
    Encrypt,
    /// Read/write-split parsing
    ReadWriteSplit,
}

impl RuleFamily {
    pub fn name(&self) -> &'static str {
        match self {
            RuleFamily::Sharding => "sharding",
            RuleFamily::Encrypt => "encrypt",
            RuleFamily::ReadWriteSplit => "read_write_split",
        }
    }
}

impl std::fmt::Display for RuleFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Statement-shape identifier, the registry key alongside the dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum StatementShape {
    Select,
    Insert,
    Update,
    Delete,
    CreateTable,
}

impl StatementShape {
    pub fn name(&self) -> &'static str {
        match self {
            StatementShape::Select => "select",
            StatementShape::Insert => "insert",
            StatementShape::Update => "update",
            StatementShape::Delete => "delete",
            StatementShape::CreateTable => "create_table",
        }
    }

    fn all() -> &'static [StatementShape] {
        &[
            StatementShape::Select,
            StatementShape::Insert,
            StatementShape::Update,
            StatementShape::Delete,
            StatementShape::CreateTable,
        ]
    }
}

impl std::fmt::Display for StatementShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One statement-rule registration: the grammar production that recognizes
/// the shape, and the statement kind it produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatementRule {
    shape: StatementShape,
    kind: StatementKind,
    /// Name of the grammar production in the external parser
    grammar_rule: &'static str,
}

impl StatementRule {
    pub fn new(shape: StatementShape, kind: StatementKind, grammar_rule: &'static str) -> Self {
        Self {
            shape,
            kind,
            grammar_rule,
        }
    }

    pub fn shape(&self) -> StatementShape {
        self.shape
    }

    pub fn kind(&self) -> StatementKind {
        self.kind
    }

    pub fn grammar_rule(&self) -> &'static str {
        self.grammar_rule
    }
}

/// Registry of parse rules for one rule family.
///
/// Built once, read-only afterwards; safe for concurrent lookup with no
/// locking.
pub struct ParseRuleRegistry {
    family: RuleFamily,
    statement_rules: HashMap<(Dialect, StatementShape), StatementRule>,
    segment_fillers: HashMap<(Dialect, SegmentKind), Box<dyn SegmentFiller>>,
}

impl ParseRuleRegistry {
    /// Create an empty registry for a family
    pub fn new(family: RuleFamily) -> Self {
        Self {
            family,
            statement_rules: HashMap::new(),
            segment_fillers: HashMap::new(),
        }
    }

    /// Build a registry with the family's default registrations.
    ///
    /// Duplicate keys are rejected here, at build time, never at first
    /// conflicting lookup.
    pub fn with_defaults(family: RuleFamily) -> ParseRuleResult<Self> {
        let mut registry = Self::new(family);
        registry.register_default_statement_rules()?;
        registry.register_default_segment_fillers()?;
        debug!(
            family = family.name(),
            statement_rules = registry.statement_rules.len(),
            segment_fillers = registry.segment_fillers.len(),
            "loaded parse rule registry"
        );
        Ok(registry)
    }

    /// The process-wide shared instance for a family.
    ///
    /// Built at most once under the `OnceLock` barrier, frozen afterwards.
    /// A build failure is stored and returned to every caller.
    pub fn shared(family: RuleFamily) -> Result<&'static ParseRuleRegistry, ParseRuleError> {
        static SHARDING: OnceLock<ParseRuleResult<ParseRuleRegistry>> = OnceLock::new();
        static ENCRYPT: OnceLock<ParseRuleResult<ParseRuleRegistry>> = OnceLock::new();
        static READ_WRITE_SPLIT: OnceLock<ParseRuleResult<ParseRuleRegistry>> = OnceLock::new();

        let cell = match family {
            RuleFamily::Sharding => &SHARDING,
            RuleFamily::Encrypt => &ENCRYPT,
            RuleFamily::ReadWriteSplit => &READ_WRITE_SPLIT,
        };
        cell.get_or_init(|| ParseRuleRegistry::with_defaults(family))
            .as_ref()
            .map_err(Clone::clone)
    }

    pub fn family(&self) -> RuleFamily {
        self.family
    }

    /// Get the statement rule for a (dialect, shape) pair.
    ///
    /// Fails with [`ParseRuleError::StatementRuleNotFound`] when no
    /// registration matches; exactly one registration exists per key by
    /// construction.
    pub fn statement_rule(
        &self,
        dialect: Dialect,
        shape: StatementShape,
    ) -> ParseRuleResult<&StatementRule> {
        self.statement_rules
            .get(&(dialect, shape))
            .ok_or(ParseRuleError::StatementRuleNotFound { dialect, shape })
    }

    /// Find the segment filler for a (dialect, segment-kind) pair.
    ///
    /// Absence is a valid, non-error outcome: the segment is skipped during
    /// statement construction.
    pub fn segment_filler(&self, dialect: Dialect, kind: SegmentKind) -> Option<&dyn SegmentFiller> {
        self.segment_fillers
            .get(&(dialect, kind))
            .map(|filler| filler.as_ref())
    }

    /// Register a statement rule, rejecting duplicate keys
    pub fn register_statement_rule(
        &mut self,
        dialect: Dialect,
        rule: StatementRule,
    ) -> ParseRuleResult<()> {
        let shape = rule.shape();
        if self
            .statement_rules
            .insert((dialect, shape), rule)
            .is_some()
        {
            return Err(ParseRuleError::DuplicateStatementRule { dialect, shape });
        }
        Ok(())
    }

    /// Register a segment filler, rejecting duplicate keys
    pub fn register_segment_filler(
        &mut self,
        dialect: Dialect,
        kind: SegmentKind,
        filler: Box<dyn SegmentFiller>,
    ) -> ParseRuleResult<()> {
        if self
            .segment_fillers
            .insert((dialect, kind), filler)
            .is_some()
        {
            return Err(ParseRuleError::DuplicateSegmentFiller { dialect, kind });
        }
        Ok(())
    }

    fn register_default_statement_rules(&mut self) -> ParseRuleResult<()> {
        for dialect in Dialect::all() {
            for shape in StatementShape::all() {
                let rule = match shape {
                    StatementShape::Select => {
                        StatementRule::new(*shape, StatementKind::Select, "selectContext")
                    }
                    StatementShape::Insert => {
                        StatementRule::new(*shape, StatementKind::Insert, "insertContext")
                    }
                    StatementShape::Update => {
                        StatementRule::new(*shape, StatementKind::Update, "updateContext")
                    }
                    StatementShape::Delete => {
                        StatementRule::new(*shape, StatementKind::Delete, "deleteContext")
                    }
                    StatementShape::CreateTable => {
                        StatementRule::new(*shape, StatementKind::Ddl, "createTableContext")
                    }
                };
                self.register_statement_rule(*dialect, rule)?;
            }
        }
        Ok(())
    }

    fn register_default_segment_fillers(&mut self) -> ParseRuleResult<()> {
        // Table references are needed by every family, if only to classify
        // which statements touch which logical tables.
        for dialect in Dialect::all() {
            self.register_segment_filler(*dialect, SegmentKind::Table, Box::new(TableFiller))?;
        }
        if self.family == RuleFamily::ReadWriteSplit {
            // Read/write-split parsing only classifies statements; it has no
            // use for assignment, predicate, or pagination semantics.
            return Ok(());
        }

        for dialect in Dialect::all() {
            self.register_segment_filler(
                *dialect,
                SegmentKind::Predicate,
                Box::new(PredicateFiller),
            )?;
            self.register_segment_filler(
                *dialect,
                SegmentKind::ColumnDefinition,
                Box::new(ColumnDefinitionFiller),
            )?;
        }

        // INSERT ... SET is MySQL-only syntax
        self.register_segment_filler(
            Dialect::MySQL,
            SegmentKind::SetAssignments,
            Box::new(SetAssignmentsFiller),
        )?;

        if self.family == RuleFamily::Sharding {
            // LIMIT/OFFSET pagination segments exist in the MySQL and
            // PostgreSQL grammars; Oracle (ROWNUM) and SQL Server (TOP)
            // express pagination through shapes this registry does not
            // rewrite, and SQL-92 has none.
            for dialect in [Dialect::MySQL, Dialect::PostgreSQL] {
                self.register_segment_filler(
                    dialect,
                    SegmentKind::RowCount,
                    Box::new(PaginationFiller::row_count()),
                )?;
                self.register_segment_filler(
                    dialect,
                    SegmentKind::Offset,
                    Box::new(PaginationFiller::offset()),
                )?;
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for ParseRuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParseRuleRegistry")
            .field("family", &self.family)
            .field("statement_rules", &self.statement_rules.len())
            .field("segment_fillers", &self.segment_fillers.len())
            .finish()
    }
}
