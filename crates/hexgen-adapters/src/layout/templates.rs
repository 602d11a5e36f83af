//! Built-in CRUD templates.
//!
//! Each constant is a Tera template producing one Python source file of a
//! generated module. Context variables: `model_pascal_case`,
//! `model_snake_case`, `actions`, and for per-action templates `action`.
//!
//! Output is FastAPI + SQLAlchemy code following hexagonal layering. The
//! generated files carry TODO markers where the user is expected to fill in
//! model-specific fields.

pub const DOMAIN_MODELS: &str = r##"from datetime import datetime

from sqlalchemy import DateTime, Integer, func
from sqlalchemy.orm import Mapped, mapped_column

from src.common.database_connection import Base


class {{ model_pascal_case }}(Base):
    """{{ model_pascal_case }} database model."""

    __tablename__ = "{{ model_snake_case }}"

    id: Mapped[int] = mapped_column(Integer, primary_key=True, autoincrement=True)

    # TODO: Add your model fields here
    # Example:
    # name: Mapped[str] = mapped_column(String(100), nullable=False, index=True)

    created_at: Mapped[datetime] = mapped_column(
        DateTime(timezone=True), nullable=False, server_default=func.now()
    )
    updated_at: Mapped[datetime] = mapped_column(
        DateTime(timezone=True),
        nullable=False,
        server_default=func.now(),
        onupdate=func.now(),
    )

    def __repr__(self) -> str:
        return f"<{{ model_pascal_case }}(id={self.id})>"
"##;

pub const DOMAIN_REPOSITORY: &str = r##"from abc import ABC, abstractmethod

from src.{{ model_snake_case }}.application.schemas import (
    Create{{ model_pascal_case }}Request,
    FilterParams,
    Update{{ model_pascal_case }}Request,
)
from src.{{ model_snake_case }}.domain.models import {{ model_pascal_case }}


class {{ model_pascal_case }}Repository(ABC):
    """Contract for {{ model_pascal_case }} data access."""

    @abstractmethod
    async def get_by_id(self, *, id: int) -> {{ model_pascal_case }}:
        """Get a {{ model_pascal_case }} by ID, raising {{ model_pascal_case }}NotFoundException if absent."""
        ...

    @abstractmethod
    async def get(self, *, filter_params: FilterParams) -> tuple[list[{{ model_pascal_case }}], int]:
        """Get a filtered, paginated list and the total count."""
        ...

    @abstractmethod
    async def create(self, *, data: Create{{ model_pascal_case }}Request) -> {{ model_pascal_case }}:
        """Create a new {{ model_pascal_case }}."""
        ...

    @abstractmethod
    async def update(self, *, id: int, data: Update{{ model_pascal_case }}Request) -> {{ model_pascal_case }}:
        """Update an existing {{ model_pascal_case }}."""
        ...

    @abstractmethod
    async def delete(self, *, id: int) -> {{ model_pascal_case }}:
        """Delete a {{ model_pascal_case }} and return the deleted instance."""
        ...
"##;

pub const DOMAIN_EXCEPTIONS: &str = r##"from fastapi import Request, status

from src.common.std_response import std_response


class {{ model_pascal_case }}NotFoundException(Exception):
    pass


async def {{ model_snake_case }}_not_found_handler(request: Request, exc: {{ model_pascal_case }}NotFoundException):
    return std_response(
        status_code=status.HTTP_404_NOT_FOUND,
        ok=False,
        msg=str(exc),
        data=None,
    )


EXCEPTIONS_{{ model_pascal_case | upper }}_MAPPING = [
    ({{ model_snake_case }}_not_found_handler, {{ model_pascal_case }}NotFoundException),
]
"##;

pub const DOMAIN_DTOS: &str = r##""""Domain data transfer objects for {{ model_pascal_case }}. Plain dataclasses, no framework types."""

from dataclasses import dataclass
from typing import Optional


@dataclass
class Create{{ model_pascal_case }}DTO:
    """Data for creating a {{ model_pascal_case }}."""
    # TODO: Add your domain fields here
    pass


@dataclass
class Update{{ model_pascal_case }}DTO:
    """Data for updating a {{ model_pascal_case }} (all fields optional)."""
    # TODO: Add updatable fields here
    pass


@dataclass
class {{ model_pascal_case }}FilterDTO:
    """Filtering and pagination parameters."""
    skip: int = 0
    limit: int = 10
    order_by: Optional[str] = None
    search: Optional[str] = None
"##;

pub const DOMAIN_UNIT_OF_WORK: &str = r##""""Unit of Work contract for transaction management."""

from abc import ABC, abstractmethod


class UnitOfWork(ABC):
    """Manages transaction boundaries without exposing infrastructure."""

    @abstractmethod
    def commit(self) -> None:
        ...

    @abstractmethod
    def rollback(self) -> None:
        ...

    @abstractmethod
    def flush(self) -> None:
        ...

    def __enter__(self):
        return self

    def __exit__(self, exc_type, exc_val, exc_tb):
        if exc_type is not None:
            self.rollback()
        else:
            self.commit()
"##;

pub const APPLICATION_SCHEMAS: &str = r##"from datetime import datetime
from typing import Optional

from pydantic import BaseModel, ConfigDict, Field


class {{ model_pascal_case }}Base(BaseModel):
    """Common fields shared by {{ model_pascal_case }} schemas."""
    # TODO: Add your model fields here
    pass


class Create{{ model_pascal_case }}Request({{ model_pascal_case }}Base):
    """Payload for creating a new {{ model_pascal_case }}."""


class Update{{ model_pascal_case }}Request(BaseModel):
    """Payload for updating an existing {{ model_pascal_case }} (partial)."""
    # TODO: Add updatable fields here, all optional


class {{ model_pascal_case }}Response({{ model_pascal_case }}Base):
    """Full detail response."""

    id: int = Field(..., gt=0)
    created_at: datetime
    updated_at: datetime

    model_config = ConfigDict(from_attributes=True)


class {{ model_pascal_case }}ListResponse(BaseModel):
    """Summary view for list responses."""

    id: int = Field(..., gt=0)
    # TODO: Add the main fields for the list view
    created_at: datetime

    model_config = ConfigDict(from_attributes=True)


class FilterParams(BaseModel):
    """Filtering and pagination query parameters."""

    skip: int = Field(default=0, ge=0)
    limit: int = Field(default=10, ge=1, le=100)
    order_by: Optional[str] = Field(default="id")
    search: Optional[str] = Field(default=None, max_length=100)
"##;

pub const APPLICATION_SERVICE: &str = r##"from src.{{ model_snake_case }}.application.interfaces import {{ model_pascal_case }}ServiceInterface
from src.{{ model_snake_case }}.domain.dtos import (
    Create{{ model_pascal_case }}DTO,
    Update{{ model_pascal_case }}DTO,
    {{ model_pascal_case }}FilterDTO,
)
from src.{{ model_snake_case }}.domain.models import {{ model_pascal_case }}
from src.{{ model_snake_case }}.domain.repository import {{ model_pascal_case }}Repository


class {{ model_pascal_case }}Service({{ model_pascal_case }}ServiceInterface):
    """Application service orchestrating {{ model_pascal_case }} business rules."""

    def __init__(self, repository: {{ model_pascal_case }}Repository):
        self._repository = repository

    async def get_by_id(self, *, id: int) -> {{ model_pascal_case }}:
        # TODO: Add business validations if needed
        return await self._repository.get_by_id(id=id)

    async def get(self, *, filter_dto: {{ model_pascal_case }}FilterDTO) -> tuple[list[{{ model_pascal_case }}], int]:
        return await self._repository.get(filter_dto=filter_dto)

    async def create(self, *, data: Create{{ model_pascal_case }}DTO) -> {{ model_pascal_case }}:
        return await self._repository.create(data=data)

    async def update(self, *, id: int, data: Update{{ model_pascal_case }}DTO) -> {{ model_pascal_case }}:
        return await self._repository.update(id=id, data=data)

    async def delete(self, *, id: int) -> {{ model_pascal_case }}:
        return await self._repository.delete(id=id)
"##;

pub const APPLICATION_INTERFACES: &str = r##"from abc import ABC, abstractmethod

from src.{{ model_snake_case }}.domain.dtos import (
    Create{{ model_pascal_case }}DTO,
    Update{{ model_pascal_case }}DTO,
    {{ model_pascal_case }}FilterDTO,
)
from src.{{ model_snake_case }}.domain.models import {{ model_pascal_case }}


class {{ model_pascal_case }}ServiceInterface(ABC):
    """Contract for {{ model_pascal_case }} application services."""

    @abstractmethod
    async def get_by_id(self, *, id: int) -> {{ model_pascal_case }}:
        ...

    @abstractmethod
    async def get(self, *, filter_dto: {{ model_pascal_case }}FilterDTO) -> tuple[list[{{ model_pascal_case }}], int]:
        ...

    @abstractmethod
    async def create(self, *, data: Create{{ model_pascal_case }}DTO) -> {{ model_pascal_case }}:
        ...

    @abstractmethod
    async def update(self, *, id: int, data: Update{{ model_pascal_case }}DTO) -> {{ model_pascal_case }}:
        ...

    @abstractmethod
    async def delete(self, *, id: int) -> {{ model_pascal_case }}:
        ...
"##;

pub const APPLICATION_HANDLERS: &str = r##""""Handlers coordinating between the web layer and use cases."""

from src.{{ model_snake_case }}.application.schemas import (
    Create{{ model_pascal_case }}Request,
    FilterParams,
    Update{{ model_pascal_case }}Request,
)
from src.{{ model_snake_case }}.application.use_cases import (
{%- for action in actions %}
    {{ action | capitalize }}UseCase,
{%- endfor %}
)
from src.{{ model_snake_case }}.domain.models import {{ model_pascal_case }}

{% for action in actions %}
{%- if action == "create" %}

async def create_handler(
    *,
    create_{{ model_snake_case }}_request: Create{{ model_pascal_case }}Request,
    create_use_case: CreateUseCase,
) -> {{ model_pascal_case }}:
    """Handle {{ model_pascal_case }} creation."""
    return await create_use_case.execute({{ model_snake_case }}_request=create_{{ model_snake_case }}_request)

{% elif action == "retrieve" %}

async def retrieve_handler(
    *,
    {{ model_snake_case }}_id: int,
    retrieve_use_case: RetrieveUseCase,
) -> {{ model_pascal_case }}:
    """Handle {{ model_pascal_case }} retrieval by ID."""
    return await retrieve_use_case.execute({{ model_snake_case }}_id={{ model_snake_case }}_id)

{% elif action == "list" %}

async def list_handler(
    *,
    filter_params: FilterParams,
    list_use_case: ListUseCase,
) -> tuple[list[{{ model_pascal_case }}], int]:
    """Handle {{ model_pascal_case }} list retrieval."""
    return await list_use_case.execute(filter_params=filter_params)

{% elif action == "update" %}

async def update_handler(
    *,
    {{ model_snake_case }}_id: int,
    update_{{ model_snake_case }}_request: Update{{ model_pascal_case }}Request,
    update_use_case: UpdateUseCase,
) -> {{ model_pascal_case }}:
    """Handle {{ model_pascal_case }} update."""
    return await update_use_case.execute(
        {{ model_snake_case }}_id={{ model_snake_case }}_id,
        {{ model_snake_case }}_request=update_{{ model_snake_case }}_request,
    )

{% elif action == "delete" %}

async def delete_handler(
    *,
    {{ model_snake_case }}_id: int,
    delete_use_case: DeleteUseCase,
) -> {{ model_pascal_case }}:
    """Handle {{ model_pascal_case }} deletion."""
    return await delete_use_case.execute({{ model_snake_case }}_id={{ model_snake_case }}_id)

{% endif %}
{%- endfor %}
"##;

pub const APPLICATION_MAPPERS: &str = r##""""Mappers converting between application schemas (Pydantic) and domain DTOs."""

from src.{{ model_snake_case }}.application.schemas import (
    Create{{ model_pascal_case }}Request,
    FilterParams,
    Update{{ model_pascal_case }}Request,
)
from src.{{ model_snake_case }}.domain.dtos import (
    Create{{ model_pascal_case }}DTO,
    Update{{ model_pascal_case }}DTO,
    {{ model_pascal_case }}FilterDTO,
)


class {{ model_pascal_case }}Mapper:
    """Converts {{ model_pascal_case }} representations between layers."""

    @staticmethod
    def to_create_dto(request: Create{{ model_pascal_case }}Request) -> Create{{ model_pascal_case }}DTO:
        return Create{{ model_pascal_case }}DTO(**request.model_dump())

    @staticmethod
    def to_update_dto(request: Update{{ model_pascal_case }}Request) -> Update{{ model_pascal_case }}DTO:
        return Update{{ model_pascal_case }}DTO(**request.model_dump(exclude_none=True))

    @staticmethod
    def to_filter_dto(params: FilterParams) -> {{ model_pascal_case }}FilterDTO:
        return {{ model_pascal_case }}FilterDTO(
            skip=params.skip,
            limit=params.limit,
            order_by=params.order_by,
            search=params.search,
        )
"##;

pub const INFRASTRUCTURE_WEB: &str = r##"from typing import Annotated

from fastapi import APIRouter, Depends, Path, Query, status
from sqlalchemy.orm import Session

from src.common.database_connection import get_db
from src.common.std_response import StandardResponse, std_response
from src.{{ model_snake_case }}.application.handlers import (
{%- for action in actions %}
    {{ action }}_handler,
{%- endfor %}
)
from src.{{ model_snake_case }}.application.schemas import (
    Create{{ model_pascal_case }}Request,
    FilterParams,
    Update{{ model_pascal_case }}Request,
    {{ model_pascal_case }}ListResponse,
    {{ model_pascal_case }}Response,
)
from src.{{ model_snake_case }}.application.service import {{ model_pascal_case }}Service
from src.{{ model_snake_case }}.application.use_cases import (
{%- for action in actions %}
    {{ action | capitalize }}UseCase,
{%- endfor %}
)
from src.{{ model_snake_case }}.infrastructure.database import ORM{{ model_pascal_case }}Repository
from src.{{ model_snake_case }}.infrastructure.unit_of_work import SQLAlchemyUnitOfWork

router = APIRouter(
    prefix="/{{ model_snake_case }}",
    tags=["{{ model_pascal_case }}"],
)


def get_{{ model_snake_case }}_repository(db: Session = Depends(get_db)) -> ORM{{ model_pascal_case }}Repository:
    return ORM{{ model_pascal_case }}Repository(db=db)


def get_{{ model_snake_case }}_unit_of_work(db: Session = Depends(get_db)) -> SQLAlchemyUnitOfWork:
    return SQLAlchemyUnitOfWork(session=db)


def get_{{ model_snake_case }}_service(
    repository: ORM{{ model_pascal_case }}Repository = Depends(get_{{ model_snake_case }}_repository),
) -> {{ model_pascal_case }}Service:
    return {{ model_pascal_case }}Service(repository)

{% for action in actions %}
{%- if action == "create" %}

@router.post(
    "/",
    response_model=StandardResponse[{{ model_pascal_case }}Response],
    status_code=status.HTTP_201_CREATED,
    summary="Create a new {{ model_pascal_case }}",
)
async def create_{{ model_snake_case }}(
    {{ model_snake_case }}_data: Create{{ model_pascal_case }}Request,
    unit_of_work: SQLAlchemyUnitOfWork = Depends(get_{{ model_snake_case }}_unit_of_work),
    repository: ORM{{ model_pascal_case }}Repository = Depends(get_{{ model_snake_case }}_repository),
    service: {{ model_pascal_case }}Service = Depends(get_{{ model_snake_case }}_service),
) -> StandardResponse[{{ model_pascal_case }}Response]:
    create_use_case = CreateUseCase(
        database=unit_of_work.session,
        {{ model_snake_case }}_repository=repository,
        {{ model_snake_case }}_service=service,
    )
    result = await create_handler(
        create_{{ model_snake_case }}_request={{ model_snake_case }}_data,
        create_use_case=create_use_case,
    )
    return std_response(data=result, status_code=status.HTTP_201_CREATED)

{% elif action == "list" %}

@router.get(
    "/",
    response_model=StandardResponse[list[{{ model_pascal_case }}ListResponse]],
    status_code=status.HTTP_200_OK,
    summary="List {{ model_pascal_case }}s",
)
async def list_{{ model_snake_case }}s(
    filter_params: Annotated[FilterParams, Query()],
    unit_of_work: SQLAlchemyUnitOfWork = Depends(get_{{ model_snake_case }}_unit_of_work),
    repository: ORM{{ model_pascal_case }}Repository = Depends(get_{{ model_snake_case }}_repository),
    service: {{ model_pascal_case }}Service = Depends(get_{{ model_snake_case }}_service),
) -> StandardResponse[list[{{ model_pascal_case }}ListResponse]]:
    list_use_case = ListUseCase(
        database=unit_of_work.session,
        {{ model_snake_case }}_repository=repository,
        {{ model_snake_case }}_service=service,
    )
    result, count = await list_handler(
        filter_params=filter_params,
        list_use_case=list_use_case,
    )
    return std_response(data=result, count=count)

{% elif action == "retrieve" %}

@router.get(
    "/{{ '{' }}{{ model_snake_case }}_id}",
    response_model=StandardResponse[{{ model_pascal_case }}Response],
    status_code=status.HTTP_200_OK,
    summary="Get {{ model_pascal_case }} by ID",
)
async def get_{{ model_snake_case }}(
    {{ model_snake_case }}_id: Annotated[int, Path(..., gt=0)],
    unit_of_work: SQLAlchemyUnitOfWork = Depends(get_{{ model_snake_case }}_unit_of_work),
    repository: ORM{{ model_pascal_case }}Repository = Depends(get_{{ model_snake_case }}_repository),
    service: {{ model_pascal_case }}Service = Depends(get_{{ model_snake_case }}_service),
) -> StandardResponse[{{ model_pascal_case }}Response]:
    retrieve_use_case = RetrieveUseCase(
        database=unit_of_work.session,
        {{ model_snake_case }}_repository=repository,
        {{ model_snake_case }}_service=service,
    )
    result = await retrieve_handler(
        {{ model_snake_case }}_id={{ model_snake_case }}_id,
        retrieve_use_case=retrieve_use_case,
    )
    return std_response(data=result)

{% elif action == "update" %}

@router.put(
    "/{{ '{' }}{{ model_snake_case }}_id}",
    response_model=StandardResponse[{{ model_pascal_case }}Response],
    status_code=status.HTTP_200_OK,
    summary="Update {{ model_pascal_case }}",
)
async def update_{{ model_snake_case }}(
    {{ model_snake_case }}_id: Annotated[int, Path(..., gt=0)],
    {{ model_snake_case }}_data: Update{{ model_pascal_case }}Request,
    unit_of_work: SQLAlchemyUnitOfWork = Depends(get_{{ model_snake_case }}_unit_of_work),
    repository: ORM{{ model_pascal_case }}Repository = Depends(get_{{ model_snake_case }}_repository),
    service: {{ model_pascal_case }}Service = Depends(get_{{ model_snake_case }}_service),
) -> StandardResponse[{{ model_pascal_case }}Response]:
    update_use_case = UpdateUseCase(
        database=unit_of_work.session,
        {{ model_snake_case }}_repository=repository,
        {{ model_snake_case }}_service=service,
    )
    result = await update_handler(
        {{ model_snake_case }}_id={{ model_snake_case }}_id,
        update_{{ model_snake_case }}_request={{ model_snake_case }}_data,
        update_use_case=update_use_case,
    )
    return std_response(data=result)

{% elif action == "delete" %}

@router.delete(
    "/{{ '{' }}{{ model_snake_case }}_id}",
    response_model=StandardResponse[{{ model_pascal_case }}Response],
    status_code=status.HTTP_200_OK,
    summary="Delete {{ model_pascal_case }}",
)
async def delete_{{ model_snake_case }}(
    {{ model_snake_case }}_id: Annotated[int, Path(..., gt=0)],
    unit_of_work: SQLAlchemyUnitOfWork = Depends(get_{{ model_snake_case }}_unit_of_work),
    repository: ORM{{ model_pascal_case }}Repository = Depends(get_{{ model_snake_case }}_repository),
    service: {{ model_pascal_case }}Service = Depends(get_{{ model_snake_case }}_service),
) -> StandardResponse[{{ model_pascal_case }}Response]:
    delete_use_case = DeleteUseCase(
        database=unit_of_work.session,
        {{ model_snake_case }}_repository=repository,
        {{ model_snake_case }}_service=service,
    )
    result = await delete_handler(
        {{ model_snake_case }}_id={{ model_snake_case }}_id,
        delete_use_case=delete_use_case,
    )
    return std_response(data=result)

{% endif %}
{%- endfor %}
"##;

pub const INFRASTRUCTURE_DATABASE: &str = r##"from sqlalchemy import asc, desc, func, select
from sqlalchemy.orm import Session

from src.{{ model_snake_case }}.application.schemas import (
    Create{{ model_pascal_case }}Request,
    FilterParams,
    Update{{ model_pascal_case }}Request,
)
from src.{{ model_snake_case }}.domain.exceptions import {{ model_pascal_case }}NotFoundException
from src.{{ model_snake_case }}.domain.models import {{ model_pascal_case }}
from src.{{ model_snake_case }}.domain.repository import {{ model_pascal_case }}Repository


class ORM{{ model_pascal_case }}Repository({{ model_pascal_case }}Repository):
    """SQLAlchemy 2.0 style implementation of {{ model_pascal_case }}Repository."""

    def __init__(self, *, db: Session):
        self.db = db

    async def get_by_id(self, *, id: int) -> {{ model_pascal_case }}:
        stmt = select({{ model_pascal_case }}).where({{ model_pascal_case }}.id == id)
        {{ model_snake_case }} = self.db.execute(stmt).scalar_one_or_none()
        if not {{ model_snake_case }}:
            raise {{ model_pascal_case }}NotFoundException(f"{{ model_pascal_case }} with ID {id} not found")
        return {{ model_snake_case }}

    async def get(self, *, filter_params: FilterParams) -> tuple[list[{{ model_pascal_case }}], int]:
        stmt = select({{ model_pascal_case }})

        # TODO: Apply search and custom filters from filter_params
        count_stmt = select(func.count()).select_from(stmt.subquery())
        count = self.db.execute(count_stmt).scalar()

        if filter_params.order_by:
            order_field = filter_params.order_by.lstrip("-")
            is_desc = filter_params.order_by.startswith("-")
            if hasattr({{ model_pascal_case }}, order_field):
                column = getattr({{ model_pascal_case }}, order_field)
                stmt = stmt.order_by(desc(column) if is_desc else asc(column))
        else:
            stmt = stmt.order_by(desc({{ model_pascal_case }}.id))

        stmt = stmt.offset(filter_params.skip).limit(filter_params.limit)
        rows = self.db.execute(stmt).scalars().all()
        return list(rows), count

    async def create(self, *, data: Create{{ model_pascal_case }}Request) -> {{ model_pascal_case }}:
        {{ model_snake_case }} = {{ model_pascal_case }}(**data.model_dump())
        self.db.add({{ model_snake_case }})
        self.db.flush()
        self.db.refresh({{ model_snake_case }})
        return {{ model_snake_case }}

    async def update(self, *, id: int, data: Update{{ model_pascal_case }}Request) -> {{ model_pascal_case }}:
        {{ model_snake_case }} = await self.get_by_id(id=id)
        for field, value in data.model_dump(exclude_unset=True, exclude_none=True).items():
            setattr({{ model_snake_case }}, field, value)
        self.db.flush()
        self.db.refresh({{ model_snake_case }})
        return {{ model_snake_case }}

    async def delete(self, *, id: int) -> {{ model_pascal_case }}:
        {{ model_snake_case }} = await self.get_by_id(id=id)
        self.db.delete({{ model_snake_case }})
        self.db.flush()
        return {{ model_snake_case }}
"##;

pub const INFRASTRUCTURE_UNIT_OF_WORK: &str = r##"from sqlalchemy.orm import Session

from src.{{ model_snake_case }}.domain.unit_of_work import UnitOfWork


class SQLAlchemyUnitOfWork(UnitOfWork):
    """SQLAlchemy session backed Unit of Work."""

    def __init__(self, *, session: Session):
        self.session = session

    def commit(self) -> None:
        self.session.commit()

    def rollback(self) -> None:
        self.session.rollback()

    def flush(self) -> None:
        self.session.flush()
"##;

pub const USE_CASE_INIT: &str = r##"{% for action in actions -%}
from .{{ action }} import {{ action | capitalize }}UseCase
{% endfor %}"##;

pub const USE_CASE: &str = r##""""{{ action | capitalize }} use case for {{ model_pascal_case }}."""

from sqlalchemy.orm import Session

from src.{{ model_snake_case }}.application.interfaces import {{ model_pascal_case }}ServiceInterface
{%- if action == "create" or action == "update" %}
from src.{{ model_snake_case }}.application.schemas import {{ action | capitalize }}{{ model_pascal_case }}Request
{%- endif %}
{%- if action == "list" %}
from src.{{ model_snake_case }}.application.schemas import FilterParams
{%- endif %}
from src.{{ model_snake_case }}.domain.models import {{ model_pascal_case }}
from src.{{ model_snake_case }}.domain.repository import {{ model_pascal_case }}Repository


class {{ action | capitalize }}UseCase:
    """Business logic for {{ action }}ing a {{ model_pascal_case }}."""

    def __init__(
        self,
        *,
        database: Session,
        {{ model_snake_case }}_repository: {{ model_pascal_case }}Repository,
        {{ model_snake_case }}_service: {{ model_pascal_case }}ServiceInterface,
    ):
        self.database = database
        self.{{ model_snake_case }}_repository = {{ model_snake_case }}_repository
        self.{{ model_snake_case }}_service = {{ model_snake_case }}_service
{% if action == "create" %}
    async def execute(self, *, {{ model_snake_case }}_request: Create{{ model_pascal_case }}Request) -> {{ model_pascal_case }}:
        # TODO: Add your business logic here
        {{ model_snake_case }} = await self.{{ model_snake_case }}_repository.create(data={{ model_snake_case }}_request)
        self.database.commit()
        return {{ model_snake_case }}
{% elif action == "update" %}
    async def execute(self, *, {{ model_snake_case }}_id: int, {{ model_snake_case }}_request: Update{{ model_pascal_case }}Request) -> {{ model_pascal_case }}:
        # TODO: Add your business logic here
        {{ model_snake_case }} = await self.{{ model_snake_case }}_repository.update(
            id={{ model_snake_case }}_id,
            data={{ model_snake_case }}_request,
        )
        self.database.commit()
        return {{ model_snake_case }}
{% elif action == "list" %}
    async def execute(self, *, filter_params: FilterParams) -> tuple[list[{{ model_pascal_case }}], int]:
        # TODO: Add your business logic here
        data, count = await self.{{ model_snake_case }}_repository.get(filter_params=filter_params)
        return data, count
{% elif action == "retrieve" %}
    async def execute(self, *, {{ model_snake_case }}_id: int) -> {{ model_pascal_case }}:
        # TODO: Add your business logic here
        return await self.{{ model_snake_case }}_repository.get_by_id(id={{ model_snake_case }}_id)
{% elif action == "delete" %}
    async def execute(self, *, {{ model_snake_case }}_id: int) -> {{ model_pascal_case }}:
        # TODO: Add your business logic here
        {{ model_snake_case }} = await self.{{ model_snake_case }}_repository.delete(id={{ model_snake_case }}_id)
        self.database.commit()
        return {{ model_snake_case }}
{% endif %}"##;
