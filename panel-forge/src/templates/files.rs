//! Built-in source templates
//!
//! Rendered with HTML escaping disabled. Every template receives
//! `namespace`, `class_name` and a sorted `imports` list; the remaining
//! variables are listed per template.

/// Form schema (`configure(Schema)`)
pub const FORM_TEMPLATE: &str = r"<?php

namespace {{namespace}};

{{#each imports}}
use {{this}};
{{/each}}

class {{class_name}}
{
    public static function configure(Schema $schema): Schema
    {
        return $schema
            ->components([
                //
            ]);
    }
}
";

/// Infolist schema (`configure(Schema)`)
pub const INFOLIST_TEMPLATE: &str = r"<?php

namespace {{namespace}};

{{#each imports}}
use {{this}};
{{/each}}

class {{class_name}}
{
    public static function configure(Schema $schema): Schema
    {
        return $schema
            ->components([
                //
            ]);
    }
}
";

/// Table class
///
/// Extra variables: `table` (see [`TABLE_BODY_PARTIAL`]).
pub const TABLE_TEMPLATE: &str = r"<?php

namespace {{namespace}};

{{#each imports}}
use {{this}};
{{/each}}

class {{class_name}}
{
    public static function configure(Table $table): Table
    {
{{> table_body}}
    }
}
";

/// Shared table definition, used by the table class and embedded tables
///
/// Variables under `table`: `filters`, `record_actions`, `bulk_actions`
/// (lists of action class basenames).
pub const TABLE_BODY_PARTIAL: &str = r"        return $table
            ->columns([
                //
            ])
            ->filters([
{{#if table.filters}}
{{#each table.filters}}
                {{this}}::make(),
{{/each}}
{{else}}
                //
{{/if}}
            ])
            ->recordActions([
{{#each table.record_actions}}
                {{this}}::make(),
{{/each}}
            ])
            ->toolbarActions([
                BulkActionGroup::make([
{{#each table.bulk_actions}}
                    {{this}}::make(),
{{/each}}
                ]),
            ]);";

/// Resource class
///
/// Extra variables: `model_class`, `navigation_label`, `parent_class`,
/// `form_class`, `infolist_class`, `table_class`, `has_infolist`, `table`,
/// `soft_deletes`, `routes` (list of `key`, `page_class`, `path`).
pub const RESOURCE_TEMPLATE: &str = r"<?php

namespace {{namespace}};

{{#each imports}}
use {{this}};
{{/each}}

class {{class_name}} extends Resource
{
    protected static ?string $model = {{model_class}}::class;
{{#if parent_class}}

    protected static ?string $parentResource = {{parent_class}}::class;
{{/if}}

    protected static string|BackedEnum|null $navigationIcon = Heroicon::OutlinedRectangleStack;

    protected static ?string $navigationLabel = '{{navigation_label}}';

    public static function form(Schema $schema): Schema
    {
{{#if form_class}}
        return {{form_class}}::configure($schema);
{{else}}
        return $schema
            ->components([
                //
            ]);
{{/if}}
    }
{{#if has_infolist}}

    public static function infolist(Schema $schema): Schema
    {
{{#if infolist_class}}
        return {{infolist_class}}::configure($schema);
{{else}}
        return $schema
            ->components([
                //
            ]);
{{/if}}
    }
{{/if}}

    public static function table(Table $table): Table
    {
{{#if table_class}}
        return {{table_class}}::configure($table);
{{else}}
{{> table_body}}
{{/if}}
    }

    public static function getRelations(): array
    {
        return [
            //
        ];
    }

    public static function getPages(): array
    {
        return [
{{#each routes}}
            '{{key}}' => {{page_class}}::route('{{path}}'),
{{/each}}
        ];
    }
{{#if soft_deletes}}

    public static function getRecordRouteBindingEloquentQuery(): Builder
    {
        return parent::getRecordRouteBindingEloquentQuery()
            ->withoutGlobalScopes([
                SoftDeletingScope::class,
            ]);
    }
{{/if}}
}
";

/// Resource page
///
/// Extra variables: `base_class`, `resource_class`, `header_actions`
/// (list of action class basenames).
pub const PAGE_TEMPLATE: &str = r"<?php

namespace {{namespace}};

{{#each imports}}
use {{this}};
{{/each}}

class {{class_name}} extends {{base_class}}
{
    protected static string $resource = {{resource_class}}::class;
{{#if header_actions}}

    protected function getHeaderActions(): array
    {
        return [
{{#each header_actions}}
            {{this}}::make(),
{{/each}}
        ];
    }
{{/if}}
}
";
